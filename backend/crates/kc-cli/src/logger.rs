use crate::{CliError, CliResult};

use log::LevelFilter;

/// Logs go to stderr so stdout stays machine-readable.
pub fn initialize(verbose: bool) -> CliResult<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("sqlx", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| CliError::Logger {
            message: e.to_string(),
        })
}
