//! Versioned Base58Check encoding
//!
//! This module holds the digest chain used to fingerprint public keys and
//! checksum payloads, and the Base58Check codec built on top of it.

pub mod base58check;
pub mod digest;

pub use base58check::{decode, encode, VersionedPayload};
pub use digest::{checksum, hash_pub_key, CHECKSUM_LEN};
