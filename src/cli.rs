//! Command-line interface implementation for cmodule.
//! Provides argument parsing and usage text formatting using clap.

use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::constants::{ACTION_NEW, CONFIG_FILE};
use crate::error::{Error, Result};

/// Command-line arguments structure for cmodule.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "cmodule: generate C header/source module pairs",
    long_about = None,
    after_help = "action: (new) creates a new module\nmodulepath: the path to create the module in"
)]
pub struct Args {
    /// Action to perform
    #[arg(value_name = "ACTION", allow_hyphen_values = true)]
    pub action: String,

    /// Module path without extension; `.h` and `.c` are appended
    #[arg(value_name = "MODULEPATH", allow_hyphen_values = true)]
    pub module_path: OsString,

    /// Module rules file
    #[arg(short, long, value_name = "FILE", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Supported actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Creates a new module
    New,
}

impl Args {
    /// Resolves the action argument.
    ///
    /// # Errors
    /// * `Error::InvalidAction` for anything other than `new`
    pub fn action(&self) -> Result<Action> {
        match self.action.as_str() {
            ACTION_NEW => Ok(Action::New),
            other => Err(Error::InvalidAction(other.to_string())),
        }
    }

    /// Returns the module path as text.
    ///
    /// Empty paths and paths starting with `-` are accepted as given.
    ///
    /// # Errors
    /// * `Error::InvalidPath` if the path is not valid UTF-8
    pub fn module_path(&self) -> Result<&str> {
        self.module_path
            .to_str()
            .ok_or_else(|| Error::InvalidPath(self.module_path.to_string_lossy().into_owned()))
    }
}

/// Renders the short usage text printed on argument errors.
pub fn usage() -> String {
    Args::command()
        .help_template("{usage-heading} {usage}\n\n{after-help}")
        .render_help()
        .to_string()
}

/// Parses arguments from an iterator; the first item is the program name.
///
/// # Errors
/// * `Error::Usage` for a wrong number of arguments, unknown flags, or a
///   lone `--help`/`--version`
pub fn parse_args_from<I, T>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args).map_err(|e| {
        log::debug!("Argument error ({:?}): {}", e.kind(), e);
        Error::Usage(usage().trim_end().to_string())
    })
}

/// Parses the process command line.
pub fn get_args() -> Result<Args> {
    parse_args_from(std::env::args_os())
}
