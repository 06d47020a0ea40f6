//! Wallet values and the text forms derived from them
//!
//! A wallet owns one key pair and turns it into a Base58Check address and
//! a Wallet Import Format export of the private key.

#[allow(clippy::module_inception)]
pub mod wallet;

pub use wallet::{
    convert_address, convert_address_for, derive_address, derive_address_for, encode_wif,
    encode_wif_for, validate_address, validate_address_for, Wallet, WalletSummary,
};
