/// 32-byte big-endian buffer holding a scalar or a curve coordinate
pub type Bytes32 = [u8; 32];

/// Left-pad a big-endian integer to exactly `width` bytes.
///
/// Inputs longer than `width` keep their last `width` bytes.
pub fn pad(width: usize, raw: &[u8]) -> Vec<u8> {
    if raw.len() >= width {
        return raw[raw.len() - width..].to_vec();
    }
    let mut out = vec![0u8; width - raw.len()];
    out.extend_from_slice(raw);
    out
}

/// Fixed-width form of [`pad`] for 32-byte key material
pub fn pad32(raw: &[u8]) -> Bytes32 {
    let mut out = [0u8; 32];
    if raw.len() >= out.len() {
        out.copy_from_slice(&raw[raw.len() - 32..]);
    } else {
        out[32 - raw.len()..].copy_from_slice(raw);
    }
    out
}
