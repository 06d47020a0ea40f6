use crate::utils::{ripemd160_digest, sha256_digest, RIPEMD160_LEN};

pub const CHECKSUM_LEN: usize = 4;

/// RIPEMD-160 over the SHA-256 digest of a public key
pub fn hash_pub_key(pub_key: &[u8]) -> [u8; RIPEMD160_LEN] {
    let pub_key_sha256 = sha256_digest(pub_key);
    ripemd160_digest(&pub_key_sha256)
}

/// First four bytes of SHA-256(SHA-256(payload))
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first_sha = sha256_digest(payload);
    let second_sha = sha256_digest(&first_sha);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&second_sha[..CHECKSUM_LEN]);
    out
}
