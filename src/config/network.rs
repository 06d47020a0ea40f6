use crate::error::{Result, WalletError};

/// Version bytes that tag addresses and exported private keys for one network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParams {
    pub name: &'static str,
    pub address_version: u8,
    pub wif_version: u8,
}

pub const MAINNET: NetworkParams = NetworkParams {
    name: "mainnet",
    address_version: 0x00,
    wif_version: 0x80,
};

pub const TESTNET: NetworkParams = NetworkParams {
    name: "testnet",
    address_version: 0x6f,
    wif_version: 0xef,
};

const KNOWN_NETWORKS: [&NetworkParams; 2] = [&MAINNET, &TESTNET];

impl NetworkParams {
    pub fn by_name(name: &str) -> Result<&'static NetworkParams> {
        let wanted = name.trim().to_lowercase();
        KNOWN_NETWORKS
            .into_iter()
            .find(|params| params.name == wanted)
            .ok_or_else(|| {
                WalletError::Config(format!(
                    "Unknown network: {name}. Valid options: mainnet, testnet"
                ))
            })
    }
}
