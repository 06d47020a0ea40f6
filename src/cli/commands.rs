use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "architect-wallet")]
pub struct Opt {
    #[arg(
        long = "network",
        global = true,
        help = "Network whose version bytes to use (mainnet, testnet); overrides WALLET_NETWORK"
    )]
    pub network: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "createwallet", about = "Generate a new key pair")]
    Createwallet {
        #[arg(long = "json", help = "Print the wallet as JSON")]
        json: bool,
    },
    #[command(
        name = "importkey",
        about = "Rebuild a wallet from a hex private scalar"
    )]
    ImportKey {
        #[arg(help = "Big-endian private scalar in hex")]
        scalar: String,
        #[arg(long = "json", help = "Print the wallet as JSON")]
        json: bool,
    },
    #[command(
        name = "importwif",
        about = "Rebuild a wallet from a Wallet Import Format string"
    )]
    ImportWif {
        #[arg(help = "Uncompressed WIF private key")]
        wif: String,
        #[arg(long = "json", help = "Print the wallet as JSON")]
        json: bool,
    },
    #[command(name = "validateaddress", about = "Check an address and its checksum")]
    ValidateAddress {
        #[arg(help = "The wallet address")]
        address: String,
    },
    #[command(name = "decode", about = "Show the version byte and payload of a Base58Check string")]
    Decode {
        #[arg(help = "Base58Check encoded string")]
        encoded: String,
    },
}
