use crate::config::{NetworkParams, MAINNET};
use crate::encoding::{self, hash_pub_key};
use crate::error::{Result, WalletError};
use crate::keys::{KeyPair, PRIVATE_KEY_LEN};
use data_encoding::HEXLOWER;
use log::debug;
use serde::{Serialize, Serializer};
use zeroize::Zeroizing;

/// Holds exactly one key pair; read-only after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    key_pair: KeyPair,
}

/// Printable view of a wallet for one network
///
/// `wif` is wiped on drop and left out of `Debug` output.
#[derive(Clone, Serialize)]
pub struct WalletSummary {
    pub network: &'static str,
    pub address: String,
    #[serde(serialize_with = "serialize_secret_str")]
    pub wif: Zeroizing<String>,
    pub public_key: String,
}

fn serialize_secret_str<S: Serializer>(
    value: &Zeroizing<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_str())
}

impl std::fmt::Debug for WalletSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSummary")
            .field("network", &self.network)
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl Wallet {
    /// Create a wallet around a freshly generated key pair
    pub fn new() -> Result<Wallet> {
        let wallet = Wallet::from_key_pair(KeyPair::generate()?);
        debug!("Generated wallet {}", wallet.get_address());
        Ok(wallet)
    }

    pub fn from_key_pair(key_pair: KeyPair) -> Wallet {
        Wallet { key_pair }
    }

    /// Rebuild a wallet from a hex private scalar
    pub fn from_scalar_hex(hex: &str) -> Result<Wallet> {
        Ok(Wallet::from_key_pair(KeyPair::from_scalar_hex(hex)?))
    }

    /// Rebuild a wallet from a mainnet WIF string
    pub fn from_wif(wif: &str) -> Result<Wallet> {
        Wallet::from_wif_for(wif, &MAINNET)
    }

    /// Rebuild a wallet from a WIF string of the given network. Only the
    /// uncompressed form (exactly 32 payload bytes) is accepted.
    pub fn from_wif_for(wif: &str, network: &NetworkParams) -> Result<Wallet> {
        let decoded = encoding::decode(wif)?;
        if decoded.version != network.wif_version {
            return Err(WalletError::WrongVersion {
                expected: network.wif_version,
                found: decoded.version,
            });
        }
        let payload = Zeroizing::new(decoded.payload);
        if payload.len() != PRIVATE_KEY_LEN {
            return Err(WalletError::InvalidKeyLength {
                expected: PRIVATE_KEY_LEN,
                found: payload.len(),
            });
        }
        Ok(Wallet::from_key_pair(KeyPair::from_scalar_bytes(&payload)))
    }

    pub fn get_address(&self) -> String {
        derive_address(self.key_pair.public_key())
    }

    pub fn get_address_for(&self, network: &NetworkParams) -> String {
        derive_address_for(self.key_pair.public_key(), network)
    }

    pub fn to_wif(&self) -> String {
        encode_wif(self.key_pair.private_key())
    }

    pub fn to_wif_for(&self, network: &NetworkParams) -> String {
        encode_wif_for(self.key_pair.private_key(), network)
    }

    pub fn get_public_key(&self) -> &[u8] {
        self.key_pair.public_key()
    }

    pub fn get_private_key(&self) -> &[u8] {
        self.key_pair.private_key()
    }

    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    pub fn summary(&self, network: &'static NetworkParams) -> WalletSummary {
        WalletSummary {
            network: network.name,
            address: self.get_address_for(network),
            wif: Zeroizing::new(self.to_wif_for(network)),
            public_key: HEXLOWER.encode(self.get_public_key()),
        }
    }
}

/// Mainnet address of an uncompressed `X || Y` public key
pub fn derive_address(pub_key: &[u8]) -> String {
    derive_address_for(pub_key, &MAINNET)
}

pub fn derive_address_for(pub_key: &[u8], network: &NetworkParams) -> String {
    convert_address_for(&hash_pub_key(pub_key), network)
}

/// Mainnet address of an already hashed public key
pub fn convert_address(pub_hash_key: &[u8]) -> String {
    convert_address_for(pub_hash_key, &MAINNET)
}

pub fn convert_address_for(pub_hash_key: &[u8], network: &NetworkParams) -> String {
    encoding::encode(network.address_version, pub_hash_key)
}

/// Uncompressed mainnet WIF of a 32-byte private key
pub fn encode_wif(private_key: &[u8]) -> String {
    encode_wif_for(private_key, &MAINNET)
}

pub fn encode_wif_for(private_key: &[u8], network: &NetworkParams) -> String {
    encoding::encode(network.wif_version, private_key)
}

pub fn validate_address(address: &str) -> bool {
    validate_address_for(address, &MAINNET)
}

pub fn validate_address_for(address: &str, network: &NetworkParams) -> bool {
    match encoding::decode(address) {
        Ok(decoded) => decoded.version == network.address_version && decoded.payload.len() == 20,
        Err(_) => false,
    }
}
