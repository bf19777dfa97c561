use anyhow::{Context, Result};
use flexi_logger::{LogSpecification, Logger, LoggerHandle};

/// Starts the stderr logger at `level`. `RUST_LOG` wins when it is set.
///
/// The returned handle must stay alive for as long as logging is wanted.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)
        .with_context(|| format!("Invalid log level '{}'", level))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .context("Failed to start logger")?;
    Ok(handle)
}

/// Parses a log specification such as `warn` or `info,jcalendars=debug`.
pub fn parse_log_spec(level: &str) -> Result<LogSpecification> {
    LogSpecification::parse(level).with_context(|| format!("Invalid log level '{}'", level))
}
