//! kc-cli library
//!
//! Environment-mode identity resolution and schema tooling behind the `kc`
//! binary. Exported so the command logic can be driven without a process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use runner::{Outcome, ResolveOutput};

/// Exit status of `kc resolve` and `kc email` when no identity is asserted
pub const EXIT_NO_IDENTITY: u8 = 2;
