use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// The environment variable that overrides the configured log filter.
const LOG_ENV: &str = "GLYPHSPIN_LOG";

/// Where log lines go.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum LogDestination {
    File(PathBuf),
    Stderr,
    /// Logging is off, e.g. while the terminal runner owns the screen.
    Disabled,
}

/// Install the global tracing subscriber.
pub(crate) fn init(level: &str, destination: &LogDestination) -> Result<(), LoggingError> {
    if *destination == LogDestination::Disabled {
        return Ok(());
    }
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| LoggingError::Filter(level.to_string(), e.to_string()))?,
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let result = match destination {
        LogDestination::Disabled => Ok(()),
        LogDestination::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogDestination::File(path) => {
            let file = File::create(path).map_err(|e| LoggingError::File(path.clone(), e))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
    };
    result.map_err(|e| LoggingError::Install(e.to_string()))
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum LoggingError {
    #[error("invalid log filter '{0}': {1}")]
    Filter(String, String),

    #[error("failed to create log file {0}: {1}")]
    File(PathBuf, std::io::Error),

    #[error("failed to install logger: {0}")]
    Install(String),
}
