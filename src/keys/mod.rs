//! Key pair generation and reconstruction
//!
//! Private scalars come either from an [`EntropySource`] or from a caller
//! supplied hex string; public keys are computed on the single wallet curve.

pub mod curve;
pub mod entropy;
pub mod key_pair;

pub use curve::{
    is_valid_public_key, reduce_scalar, scalar_base_mult, WalletCurve, CURVE_NAME,
    PUBLIC_KEY_LEN, WALLET_CURVE,
};
pub use entropy::{EntropySource, SystemEntropy};
pub use key_pair::{KeyPair, PRIVATE_KEY_LEN};
