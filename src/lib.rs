//! # Architect Wallet - Key Pairs, Addresses and WIF Export
//!
//! This is the wallet half of my blockchain, pulled out into its own crate.
//! When I come back to this code, here's what I need to remember:
//!
//! ## What It Does
//! - **Key Pairs**: P-256 private scalars, either freshly generated from the
//!   system random source or rebuilt from a hex string
//! - **Addresses**: SHA-256 then RIPEMD-160 of the `X || Y` public key,
//!   Base58Check encoded with version `0x00`
//! - **WIF Export**: the padded 32-byte private key, Base58Check encoded with
//!   version `0x80` (uncompressed form, no flag byte)
//!
//! ## How I Organized My Code
//! - `keys/`: curve arithmetic, entropy sources, key pair construction
//! - `encoding/`: digest chain and the Base58Check codec
//! - `wallet/`: the `Wallet` value and address/WIF derivation
//! - `config/`: network version bytes and log level
//! - `utils/`: hash primitives, hex parsing, fixed-width padding
//! - `cli/`: command-line interface
//!
//! ## Things That Bit Me Before
//! - Scalars and coordinates must be left-padded to 32 bytes; a short
//!   big-integer encoding silently produces the wrong address.
//! - Key generation must never fall back to a fixed seed. If the entropy
//!   source fails, `generate` returns an error.

pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod keys;
pub mod utils;
pub mod wallet;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{Config, NetworkParams, MAINNET, TESTNET};
pub use encoding::{checksum, hash_pub_key, VersionedPayload, CHECKSUM_LEN};
pub use error::{Result, WalletError};
pub use keys::{EntropySource, KeyPair, SystemEntropy, CURVE_NAME, WALLET_CURVE};
pub use utils::{pad, pad32, Bytes32};
pub use wallet::{
    convert_address, derive_address, derive_address_for, encode_wif, encode_wif_for,
    validate_address, validate_address_for, Wallet, WalletSummary,
};
