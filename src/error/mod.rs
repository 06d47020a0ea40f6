//! Error handling for the wallet
//!
//! This module provides the error types for key generation, key import
//! and Base58Check encoding.

use std::fmt;

/// Result type alias for wallet operations
pub type Result<T> = std::result::Result<T, WalletError>;

/// Error types for wallet operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Private scalar input is not valid hexadecimal
    InvalidHexInput(String),
    /// Base58 text with characters outside the alphabet, or too short to
    /// hold a version byte and checksum
    MalformedEncoding(String),
    /// Trailing checksum does not match the decoded bytes
    ChecksumMismatch { expected: [u8; 4], actual: [u8; 4] },
    /// The randomness provider could not supply usable bytes
    EntropySourceFailure(String),
    /// Decoded payload carries a different version byte than required
    WrongVersion { expected: u8, found: u8 },
    /// Decoded key material has the wrong length
    InvalidKeyLength { expected: usize, found: usize },
    /// Configuration errors
    Config(String),
    /// Serialization errors
    Serialization(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::InvalidHexInput(msg) => write!(f, "Invalid hex input: {msg}"),
            WalletError::MalformedEncoding(msg) => write!(f, "Malformed encoding: {msg}"),
            WalletError::ChecksumMismatch { expected, actual } => write!(
                f,
                "Checksum mismatch: expected {}, got {}",
                data_encoding::HEXLOWER.encode(expected),
                data_encoding::HEXLOWER.encode(actual)
            ),
            WalletError::EntropySourceFailure(msg) => {
                write!(f, "Entropy source failure: {msg}")
            }
            WalletError::WrongVersion { expected, found } => {
                write!(
                    f,
                    "Wrong version byte: expected {expected:#04x}, found {found:#04x}"
                )
            }
            WalletError::InvalidKeyLength { expected, found } => {
                write!(f, "Invalid key length: expected {expected}, found {found}")
            }
            WalletError::Config(msg) => write!(f, "Configuration error: {msg}"),
            WalletError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            WalletError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for WalletError {}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        WalletError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for WalletError {
    fn from(err: toml::de::Error) -> Self {
        WalletError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::Serialization(err.to_string())
    }
}
