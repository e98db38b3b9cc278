//! Common constants used throughout cmodule.

/// Configuration file looked up in the current working directory
pub const CONFIG_FILE: &str = "module-rules.json";

/// Extensions that select the YAML parser for a configuration file
pub const YAML_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Placeholder replaced by the guard token inside `endifComment`
pub const GUARD_PLACEHOLDER: &str = "$(GUARD)";

/// The only supported action
pub const ACTION_NEW: &str = "new";

pub const HEADER_EXTENSION: &str = "h";
pub const SOURCE_EXTENSION: &str = "c";

/// Permission bits for newly created module files
pub const FILE_MODE: u32 = 0o644;

/// Exit status for every handled failure
pub const EXIT_FAILURE: i32 = 2;
