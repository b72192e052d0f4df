//! Custom error types for cert-sculpt
//!
//! Bundle errors describe input-shape failures in the core. They are never
//! transient, so nothing here is retried.

use thiserror::Error;

/// Kind of PEM block that was expected but not found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingBlock {
    PrivateKey,
    Certificate,
}

impl std::fmt::Display for MissingBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingBlock::PrivateKey => write!(f, "PRIVATE KEY"),
            MissingBlock::Certificate => write!(f, "CERTIFICATE"),
        }
    }
}

/// Bundle parsing, decoding and archive construction errors
#[derive(Error, Debug)]
pub enum BundleError {
    #[error("Input malformed: no {missing} block found")]
    InputMalformed { missing: MissingBlock },

    #[error("Failed to decode leaf certificate: {message}")]
    LeafDecodeFailed { message: String },

    #[error("Failed to decode private key: {message}")]
    KeyDecodeFailed { message: String },

    #[error("Failed to decode chain certificate at position {position}: {message}")]
    ChainCertificateDecodeFailed { position: usize, message: String },

    #[error("Failed to build PKCS#12 archive: {message}")]
    ArchiveBuildFailed { message: String },

    #[error("Failed to open PKCS#12 archive: {message}")]
    ArchiveOpenFailed { message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Errors raised while writing a layout plan to disk
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create directory {path}: {message}")]
    CreateDirFailed { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },
}
