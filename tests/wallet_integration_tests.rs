//! Wallet integration tests
//!
//! Tests the full pipeline from a key pair to an address and a WIF string,
//! going through the public API only.

use architect_wallet::encoding::{self, VersionedPayload};
use architect_wallet::keys::{is_valid_public_key, EntropySource, KeyPair, PUBLIC_KEY_LEN};
use architect_wallet::utils::{base58_decode, base58_encode};
use architect_wallet::{
    derive_address, encode_wif, hash_pub_key, pad32, validate_address, Config, Result, Wallet,
    WalletError, TESTNET,
};
use data_encoding::HEXLOWER;
use std::io::Write;

/// Always hands out the same 32 bytes
struct FixedEntropy([u8; 32]);

impl EntropySource for FixedEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        dest.copy_from_slice(&self.0[..dest.len()]);
        Ok(())
    }
}

struct BrokenEntropy;

impl EntropySource for BrokenEntropy {
    fn fill_bytes(&self, _dest: &mut [u8]) -> Result<()> {
        Err(WalletError::EntropySourceFailure(
            "randomness provider offline".to_string(),
        ))
    }
}

#[test]
fn test_scalar_one_pipeline() {
    let key_pair = KeyPair::from_scalar_hex("01").unwrap();

    // 31 zero bytes followed by 0x01
    let mut expected_private = [0u8; 32];
    expected_private[31] = 1;
    assert_eq!(key_pair.private_key(), &expected_private);
    assert_eq!(pad32(&[0x01]), expected_private);

    // d = 1 gives the base point
    assert_eq!(
        HEXLOWER.encode(key_pair.public_key()),
        "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296\
         4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
    );

    assert_eq!(
        derive_address(key_pair.public_key()),
        "1H9ysxkbjve5xCgsooBQLxWbPjD77AHuCC"
    );
    assert_eq!(
        encode_wif(key_pair.private_key()),
        "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf"
    );
}

#[test]
fn test_zero_hash_address_golden() {
    assert_eq!(
        encoding::encode(0x00, &[0u8; 20]),
        "1111111111111111111114oLvT2"
    );
}

#[test]
fn test_determinism_across_calls() {
    let hex = "c0ffee0000000000000000000000000000000000000000000000000000001234";
    let first = Wallet::from_scalar_hex(hex).unwrap();
    let second = Wallet::from_scalar_hex(hex).unwrap();
    assert_eq!(first.key_pair(), second.key_pair());
    assert_eq!(first.get_address(), second.get_address());
    assert_eq!(first.to_wif(), second.to_wif());
}

#[test]
fn test_public_key_length_for_both_providers() {
    let generated = KeyPair::generate().unwrap();
    let imported = KeyPair::from_scalar_hex("0abc").unwrap();
    for key_pair in [&generated, &imported] {
        assert_eq!(key_pair.public_key().len(), PUBLIC_KEY_LEN);
        assert_eq!(key_pair.private_key().len(), 32);
        assert!(is_valid_public_key(key_pair.public_key()));
    }
}

#[test]
fn test_generate_with_fixed_entropy_matches_import() {
    let mut scalar = [0u8; 32];
    scalar[30] = 0xbe;
    scalar[31] = 0xef;
    let generated = KeyPair::generate_with(&FixedEntropy(scalar)).unwrap();
    let imported = KeyPair::from_scalar_hex("beef").unwrap();
    assert_eq!(generated, imported);
}

#[test]
fn test_generate_surfaces_entropy_failure() {
    let result = KeyPair::generate_with(&BrokenEntropy);
    assert!(matches!(result, Err(WalletError::EntropySourceFailure(_))));
}

#[test]
fn test_small_scalar_coordinates_are_padded() {
    // scan a handful of scalars for a public point with a leading zero byte
    // in either coordinate; its encoding must still be 64 bytes and name a
    // point on the curve
    let mut found = false;
    for d in 1u32..=600 {
        let key_pair = KeyPair::from_scalar_hex(&format!("{d:x}")).unwrap();
        if key_pair.x()[0] == 0 || key_pair.y()[0] == 0 {
            found = true;
            assert_eq!(key_pair.public_key().len(), PUBLIC_KEY_LEN);
            assert!(is_valid_public_key(key_pair.public_key()));
            break;
        }
    }
    assert!(found, "no coordinate with a leading zero byte in range");
}

#[test]
fn test_address_round_trips_through_decode() {
    let wallet = Wallet::new().unwrap();
    let decoded = encoding::decode(&wallet.get_address()).unwrap();
    assert_eq!(
        decoded,
        VersionedPayload::new(0x00, hash_pub_key(wallet.get_public_key()).to_vec())
    );
    assert!(validate_address(&wallet.get_address()));

    let wif = encoding::decode(&wallet.to_wif()).unwrap();
    assert_eq!(wif.version, 0x80);
    assert_eq!(wif.payload, wallet.get_private_key());
}

#[test]
fn test_wide_scalar_survives_wif_round_trip() {
    // 2^256 + 1 is wider than a private key; the exported WIF must still
    // restore the wallet it came from
    let wallet = Wallet::from_scalar_hex(
        "010000000000000000000000000000000000000000000000000000000000000001",
    )
    .unwrap();
    let restored = Wallet::from_wif(&wallet.to_wif()).unwrap();
    assert_eq!(restored.get_address(), wallet.get_address());
    assert_eq!(restored, wallet);

    let reduced =
        Wallet::from_scalar_hex("ffffffff00000000000000004319055258e8617b0c46353d039cdab0")
            .unwrap();
    assert_eq!(reduced.get_address(), wallet.get_address());
}

#[test]
fn test_tampered_wif_is_rejected() {
    let wallet = Wallet::from_scalar_hex("deadbeef").unwrap();
    let mut raw = base58_decode(&wallet.to_wif()).unwrap();
    raw[5] ^= 0x10;
    let tampered = base58_encode(&raw);
    assert!(matches!(
        Wallet::from_wif(&tampered),
        Err(WalletError::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_malformed_inputs() {
    assert!(matches!(
        Wallet::from_scalar_hex("xyz"),
        Err(WalletError::InvalidHexInput(_))
    ));
    assert!(matches!(
        Wallet::from_wif("5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuD0"),
        Err(WalletError::MalformedEncoding(_))
    ));
    assert!(matches!(
        encoding::decode("2g"),
        Err(WalletError::MalformedEncoding(_))
    ));
}

#[test]
fn test_config_file_selects_testnet() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "network = \"testnet\"").unwrap();
    writeln!(file, "log_level = \"debug\"").unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.network(), &TESTNET);

    let wallet = Wallet::from_scalar_hex("01").unwrap();
    let summary = wallet.summary(config.network());
    assert_eq!(summary.network, "testnet");
    let decoded = encoding::decode(&summary.address).unwrap();
    assert_eq!(decoded.version, 0x6f);
    let restored = Wallet::from_wif_for(summary.wif.as_str(), config.network()).unwrap();
    assert_eq!(restored, wallet);
}

#[test]
fn test_wallets_are_independent_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| Wallet::new().map(|w| w.get_address())))
        .collect();
    let mut addresses: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    addresses.sort();
    addresses.dedup();
    assert_eq!(addresses.len(), 4);
}
