use super::digest::{checksum, CHECKSUM_LEN};
use crate::error::{Result, WalletError};
use crate::utils::{base58_decode, base58_encode};

/// Smallest decodable buffer: one version byte plus the checksum
const MIN_DECODED_LEN: usize = 1 + CHECKSUM_LEN;

/// A version byte and the payload it tags, as carried inside a
/// Base58Check string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedPayload {
    pub version: u8,
    pub payload: Vec<u8>,
}

impl VersionedPayload {
    pub fn new(version: u8, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            version,
            payload: payload.into(),
        }
    }

    pub fn encode(&self) -> String {
        encode(self.version, &self.payload)
    }
}

/// Encode `version || payload || checksum` as Base58
pub fn encode(version: u8, payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    buf.push(version);
    buf.extend_from_slice(payload);
    let checksum = checksum(&buf);
    buf.extend_from_slice(&checksum);
    base58_encode(&buf)
}

/// Decode a Base58Check string and verify its checksum
pub fn decode(encoded: &str) -> Result<VersionedPayload> {
    let buf = base58_decode(encoded)?;
    if buf.len() < MIN_DECODED_LEN {
        return Err(WalletError::MalformedEncoding(format!(
            "decoded {} bytes, need at least {MIN_DECODED_LEN}",
            buf.len()
        )));
    }

    let (body, tail) = buf.split_at(buf.len() - CHECKSUM_LEN);
    let expected = checksum(body);
    if tail != expected {
        let mut actual = [0u8; CHECKSUM_LEN];
        actual.copy_from_slice(tail);
        return Err(WalletError::ChecksumMismatch { expected, actual });
    }

    Ok(VersionedPayload::new(body[0], &body[1..]))
}
