// This is my main entry point for the wallet CLI application
use architect_wallet::{
    encoding, validate_address_for, Command, Config, NetworkParams, Opt, Wallet,
};
use clap::Parser;
use data_encoding::HEXLOWER;
use log::{error, info};
use std::process;

fn main() {
    let opt = Opt::parse();

    // I load the configuration first so the log level can come from it
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    // RUST_LOG still wins over the configured level when it is set
    env_logger::Builder::new()
        .parse_filters(config.log_level())
        .parse_default_env()
        .init();

    if let Some(name) = opt.network.as_deref() {
        if let Err(e) = config.set_network(name) {
            error!("Error: {e}");
            process::exit(1);
        }
    }

    if let Err(e) = run_command(opt.command, config.network()) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// Each command maps onto one wallet operation
fn run_command(
    command: Command,
    network: &'static NetworkParams,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // A brand-new key pair from the system random source
        Command::Createwallet { json } => {
            let wallet = Wallet::new()?;
            info!("Created a new {} wallet", network.name);
            print_wallet(&wallet, network, json)?;
        }
        // Rebuilding a wallet from a private scalar I already have
        Command::ImportKey { scalar, json } => {
            let wallet = Wallet::from_scalar_hex(&scalar)?;
            print_wallet(&wallet, network, json)?;
        }
        Command::ImportWif { wif, json } => {
            let wallet = Wallet::from_wif_for(&wif, network)?;
            print_wallet(&wallet, network, json)?;
        }
        Command::ValidateAddress { address } => {
            if !validate_address_for(&address, network) {
                return Err(format!("Invalid {} address: {address}", network.name).into());
            }
            println!("Address {address} is valid");
        }
        // Handy when I want to look inside an address or WIF string
        Command::Decode { encoded } => {
            let decoded = encoding::decode(&encoded)?;
            println!("Version: {:#04x}", decoded.version);
            println!("Payload: {}", HEXLOWER.encode(&decoded.payload));
        }
    }
    Ok(())
}

fn print_wallet(
    wallet: &Wallet,
    network: &'static NetworkParams,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = wallet.summary(network);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Your address: {}", summary.address);
        println!("Private key (WIF): {}", summary.wif.as_str());
    }
    Ok(())
}
