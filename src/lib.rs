//! cert-sculpt library
//!
//! Takes a text bundle holding one PKCS#8 private key and one or more
//! certificates (leaf first) and re-emits it in the layouts different
//! servers expect:
//! - `full-chain`: leaf + chain in one file, plus key
//! - `leaf-plus-chain`: leaf, chain and key as separate files
//! - `leaf-only`: leaf and key
//! - `full-split`: leaf, intermediate, root and key
//! - `archive`: a PKCS#12 container
//!
//! # Usage
//!
//! ```rust,ignore
//! use cert_sculpt::bundle::{sculpt, Layout, Role};
//!
//! let raw = std::fs::read_to_string("bundle.pem")?;
//! let sculpted = sculpt(&raw, Layout::FullSplit, None)?;
//! println!("{} -> {:?}", sculpted.label, sculpted.plan.roles());
//! ```
//!
//! No chain validation or key/certificate matching is performed.

pub mod bundle;
pub mod cli;
pub mod config;
pub mod output;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use bundle::{Layout, LayoutPlan, OutputLabel, Role};
pub use cli::Cli;
pub use config::Settings;
pub use utils::BundleError;
