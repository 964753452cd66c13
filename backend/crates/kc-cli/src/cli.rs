use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "kc")]
#[command(about = "Keycloak identity resolver for environment-mode hosts")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log resolution decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}
