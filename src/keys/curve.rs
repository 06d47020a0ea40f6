//! P-256 point arithmetic through the `p256` crate
//!
//! Every key in the wallet lives on [`WALLET_CURVE`]. This module is the only
//! place that talks to the curve implementation; the rest of the crate sees
//! scalars and fixed-width `X || Y` byte arrays.

use crate::utils::pad32;
use once_cell::sync::Lazy;
use p256::elliptic_curve::bigint::U256;
use p256::elliptic_curve::group::Group;
use p256::elliptic_curve::ops::Reduce;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{FieldBytes, NistP256, ProjectivePoint, PublicKey, Scalar};
use zeroize::Zeroize;

/// The curve every wallet key is generated and imported on
pub type WalletCurve = NistP256;
pub const WALLET_CURVE: WalletCurve = NistP256;
pub const CURVE_NAME: &str = "P-256";

/// Width of a scalar in bytes
pub const SCALAR_LEN: usize = 32;
/// Width of one affine coordinate in bytes
pub const COORDINATE_LEN: usize = 32;
/// Width of an uncompressed `X || Y` public key in bytes
pub const PUBLIC_KEY_LEN: usize = 2 * COORDINATE_LEN;

/// 2^256 mod n, the weight of one 32-byte limb when folding long scalars
static LIMB_SHIFT: Lazy<Scalar> =
    Lazy::new(|| <Scalar as Reduce<U256>>::reduce(U256::MAX) + Scalar::ONE);

/// Reduce a big-endian scalar of any length modulo the group order.
pub fn reduce_scalar(raw: &[u8]) -> Scalar {
    let mut acc = Scalar::ZERO;
    for chunk in raw.rchunks(SCALAR_LEN).rev() {
        let mut limb = FieldBytes::from(pad32(chunk));
        acc = acc * *LIMB_SHIFT + <Scalar as Reduce<U256>>::reduce_bytes(&limb);
        limb.as_mut_slice().zeroize();
    }
    acc
}

/// `d * G` as uncompressed `X || Y`, or `None` at the point at infinity
pub fn scalar_base_mult(d: &Scalar) -> Option<[u8; PUBLIC_KEY_LEN]> {
    encode_point(&(ProjectivePoint::GENERATOR * d))
}

pub fn encode_point(point: &ProjectivePoint) -> Option<[u8; PUBLIC_KEY_LEN]> {
    if bool::from(point.is_identity()) {
        return None;
    }
    let encoded = point.to_affine().to_encoded_point(false);
    let mut out = [0u8; PUBLIC_KEY_LEN];
    // drop the 0x04 tag
    out.copy_from_slice(&encoded.as_bytes()[1..]);
    Some(out)
}

/// Whether `bytes` is an `X || Y` pair naming a point on the curve
pub fn is_valid_public_key(bytes: &[u8]) -> bool {
    if bytes.len() != PUBLIC_KEY_LEN {
        return false;
    }
    let mut sec1 = Vec::with_capacity(PUBLIC_KEY_LEN + 1);
    sec1.push(0x04);
    sec1.extend_from_slice(bytes);
    PublicKey::from_sec1_bytes(&sec1).is_ok()
}
