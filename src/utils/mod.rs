//! Utility functions and helpers
//!
//! This module contains the hash primitives, raw Base58 and hex helpers,
//! and the fixed-width padding used throughout the wallet.

pub mod crypto;
pub mod padding;

pub use crypto::{
    base58_decode, base58_encode, hex_to_bytes, ripemd160_digest, sha256_digest, RIPEMD160_LEN,
    SHA256_LEN,
};

pub use padding::{pad, pad32, Bytes32};
