use super::curve::{
    reduce_scalar, scalar_base_mult, COORDINATE_LEN, CURVE_NAME, PUBLIC_KEY_LEN, SCALAR_LEN,
};
use super::entropy::{EntropySource, SystemEntropy};
use crate::error::{Result, WalletError};
use crate::utils::{hex_to_bytes, pad32, Bytes32};
use log::{debug, warn};
use p256::elliptic_curve::bigint::U256;
use p256::elliptic_curve::ops::Reduce;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::elliptic_curve::PrimeField;
use p256::{FieldBytes, Scalar, SecretKey};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

pub const PRIVATE_KEY_LEN: usize = SCALAR_LEN;

/// Upper bound on rejection-sampling draws before the entropy source is
/// considered broken
const MAX_SCALAR_DRAWS: usize = 64;

/// A private scalar together with its public point.
///
/// The private key is always [`PRIVATE_KEY_LEN`] bytes, big-endian, with any
/// leading zero bytes of the scalar restored. The public key is the
/// uncompressed `X || Y` without a prefix byte.
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct KeyPair {
    private_key: Bytes32,
    public_key: [u8; PUBLIC_KEY_LEN],
}

impl KeyPair {
    /// Generate a fresh key pair from the operating system's random source.
    pub fn generate() -> Result<KeyPair> {
        let entropy = SystemEntropy::new();
        Self::generate_with(&entropy)
    }

    /// Generate a key pair, drawing the scalar from `source`.
    ///
    /// Candidates outside `[1, n)` are discarded and redrawn.
    pub fn generate_with<E: EntropySource + ?Sized>(source: &E) -> Result<KeyPair> {
        let mut candidate = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
        for attempt in 0..MAX_SCALAR_DRAWS {
            source.fill_bytes(&mut candidate[..])?;
            // from_bytes refuses zero and anything at or above the order
            if let Ok(secret) = SecretKey::from_bytes(FieldBytes::from_slice(&candidate[..])) {
                debug!(
                    "Drew private scalar on {} after {} attempt(s)",
                    CURVE_NAME,
                    attempt + 1
                );
                return Ok(Self::from_secret_key(&secret));
            }
        }
        Err(WalletError::EntropySourceFailure(format!(
            "no usable scalar after {MAX_SCALAR_DRAWS} draws"
        )))
    }

    /// Rebuild a key pair from a big-endian hex private scalar.
    ///
    /// The scalar is not range-checked: zero or values at or above the group
    /// order still produce a (cryptographically unsafe) key pair.
    pub fn from_scalar_hex(hex: &str) -> Result<KeyPair> {
        let raw = Zeroizing::new(hex_to_bytes(hex)?);
        Ok(Self::from_scalar_bytes(&raw))
    }

    /// Rebuild a key pair from big-endian scalar bytes of any length.
    ///
    /// Up to 32 significant bytes are kept as given and reduced modulo `n`
    /// only for the point multiplication. Wider scalars are reduced first,
    /// so the stored private key always rebuilds the same public key.
    pub fn from_scalar_bytes(raw: &[u8]) -> KeyPair {
        let start = raw.iter().position(|b| *b != 0).unwrap_or(raw.len());
        let significant = &raw[start..];

        let (private_key, scalar) = if significant.len() <= SCALAR_LEN {
            let private_key = pad32(significant);
            let scalar = Zeroizing::new(<Scalar as Reduce<U256>>::reduce_bytes(
                FieldBytes::from_slice(&private_key),
            ));
            (private_key, scalar)
        } else {
            debug!(
                "Reducing {}-byte scalar modulo the {} order",
                significant.len(),
                CURVE_NAME
            );
            let scalar = Zeroizing::new(reduce_scalar(significant));
            let mut repr = scalar.to_repr();
            let private_key = pad32(&repr);
            repr.as_mut_slice().zeroize();
            (private_key, scalar)
        };

        let public_key = match scalar_base_mult(&scalar) {
            Some(point) => point,
            None => {
                warn!("Scalar is a multiple of the group order, public key set to all zeros");
                [0u8; PUBLIC_KEY_LEN]
            }
        };
        KeyPair {
            private_key,
            public_key,
        }
    }

    fn from_secret_key(secret: &SecretKey) -> KeyPair {
        let encoded = secret.public_key().to_encoded_point(false);
        let mut public_key = [0u8; PUBLIC_KEY_LEN];
        public_key.copy_from_slice(&encoded.as_bytes()[1..]);

        let mut bytes = secret.to_bytes();
        let private_key = pad32(&bytes);
        bytes.as_mut_slice().zeroize();
        KeyPair {
            private_key,
            public_key,
        }
    }

    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn x(&self) -> &[u8] {
        &self.public_key[..COORDINATE_LEN]
    }

    pub fn y(&self) -> &[u8] {
        &self.public_key[COORDINATE_LEN..]
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("curve", &CURVE_NAME)
            .field(
                "public_key",
                &data_encoding::HEXLOWER.encode(&self.public_key),
            )
            .finish_non_exhaustive()
    }
}
