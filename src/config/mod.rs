//! Configuration management
//!
//! This module selects the network whose version bytes tag addresses and
//! exported keys, and the log level used by the command-line tool.

pub mod network;
pub mod settings;

pub use network::{NetworkParams, MAINNET, TESTNET};
pub use settings::Config;
