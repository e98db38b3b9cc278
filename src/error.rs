//! Error handling for cmodule.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

use crate::constants::EXIT_FAILURE;

/// Custom error types for cmodule operations.
///
/// Every variant is fatal: nothing is retried, and the process exits through
/// [`default_error_handler`].
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong number of arguments; carries the rendered usage text.
    #[error("{0}")]
    Usage(String),

    /// The first argument was not a known action.
    #[error("Invalid action: '{0}'")]
    InvalidAction(String),

    /// The module path cannot be used as guard or include text.
    #[error("'{0}' is not a valid UTF-8 path")]
    InvalidPath(String),

    /// The directory that should hold the module could not be inspected.
    #[error("stat {path}: {source}")]
    Stat {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("'{0}' is not a directory")]
    NotADirectory(String),

    /// The configuration file could not be read.
    #[error("open {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON or does not match the schema.
    #[error("{0}")]
    JsonParse(#[from] serde_json::Error),

    /// The configuration file is not valid YAML or does not match the schema.
    #[error("{0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// One of the generated files could not be written.
    #[error("open {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Usage errors are printed verbatim, everything else gets an `error: ` prefix.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_) | Error::InvalidAction(_))
    }

    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stdout and exits with status code 2
pub fn default_error_handler(err: Error) -> ! {
    log::debug!("{:?}", err);
    if err.is_usage() {
        println!("{}", err);
    } else {
        println!("error: {}", err);
    }
    std::process::exit(err.exit_code());
}
