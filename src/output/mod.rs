//! Output module for cert-sculpt

pub mod writer;

pub use writer::{destination, write_plan};
