use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the identity asserted through environment variables
    ///
    /// Exits 0 when resolved, 2 when no identity is asserted and 1 on
    /// identity conflicts or store failures.
    Resolve,

    /// Print the asserted email without touching the database
    Email,

    /// Print the keycloak_user DDL for a database engine
    Schema {
        /// mysql, postgres or sqlite
        #[arg(long, default_value = "sqlite")]
        engine: String,
    },
}
