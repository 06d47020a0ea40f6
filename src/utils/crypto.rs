use ring::digest::{Context, SHA256};
use ripemd::{Digest as RipemdDigest, Ripemd160};

use crate::error::{Result, WalletError};
use data_encoding::HEXLOWER_PERMISSIVE;

pub const SHA256_LEN: usize = 32;
pub const RIPEMD160_LEN: usize = 20;

pub fn sha256_digest(data: &[u8]) -> [u8; SHA256_LEN] {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    let mut out = [0u8; SHA256_LEN];
    out.copy_from_slice(digest.as_ref());
    out
}

pub fn ripemd160_digest(data: &[u8]) -> [u8; RIPEMD160_LEN] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    let mut out = [0u8; RIPEMD160_LEN];
    out.copy_from_slice(hasher.finalize().as_slice());
    out
}

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    bs58::decode(data)
        .into_vec()
        .map_err(|e| WalletError::MalformedEncoding(format!("Invalid base58 encoding: {e}")))
}

/// Decode a big-endian hex string into bytes.
///
/// Accepts an optional `0x` prefix, either letter case and an odd number of
/// digits (a leading `0` is implied).
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(WalletError::InvalidHexInput("empty input".to_string()));
    }

    let mut normalized = String::with_capacity(digits.len() + 1);
    if digits.len() % 2 == 1 {
        normalized.push('0');
    }
    normalized.push_str(digits);

    HEXLOWER_PERMISSIVE
        .decode(normalized.as_bytes())
        .map_err(|e| WalletError::InvalidHexInput(format!("{digits:?}: {e}")))
}
