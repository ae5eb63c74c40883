//! Command-line front end: wires configuration, logging, the catalog sources,
//! the query engine and the persisted shopper session together.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::Cli;
pub use config::AppConfig;
