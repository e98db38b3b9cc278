//! Module generation orchestration.
//! Resolves a module path into its output files, validates the target
//! directory and writes the rendered header and implementation.

use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::load_rules;
use crate::constants::{HEADER_EXTENSION, SOURCE_EXTENSION};
use crate::error::{Error, Result};
use crate::guard::is_path_separator;
use crate::renderer::{ModuleRenderer, RenderedModule};

/// The pair of files generated for one module path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTarget {
    pub header: String,
    pub source: String,
}

impl ModuleTarget {
    /// Appends `.h` and `.c` to the module path as given.
    ///
    /// The path is treated as a plain string, so an existing dot is kept:
    /// `out/foo.bar` yields `out/foo.bar.h`, and an empty path yields `.h`.
    pub fn new(module_path: &str) -> Self {
        Self {
            header: format!("{}.{}", module_path, HEADER_EXTENSION),
            source: format!("{}.{}", module_path, SOURCE_EXTENSION),
        }
    }
}

/// Returns the directory a module path points into.
///
/// Everything before the last separator is kept, so `out/foo/` points into
/// `out/foo`. A bare name resolves to the current directory and a name
/// directly under the root resolves to the root.
pub fn target_dir(module_path: &str) -> PathBuf {
    let Some(idx) = module_path.rfind(is_path_separator) else {
        return PathBuf::from(".");
    };

    let dir = module_path[..idx].trim_end_matches(is_path_separator);
    if dir.is_empty() {
        PathBuf::from(&module_path[..1])
    } else {
        PathBuf::from(dir)
    }
}

/// Ensures the directory that will hold the module exists and is a directory.
///
/// # Errors
/// * `Error::Stat` if the directory cannot be inspected
/// * `Error::NotADirectory` if the path exists but is something else
pub fn check_target_dir(module_path: &str) -> Result<PathBuf> {
    let dir = target_dir(module_path);
    let metadata = std::fs::metadata(&dir).map_err(|source| Error::Stat {
        path: dir.display().to_string(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(Error::NotADirectory(dir.display().to_string()));
    }
    Ok(dir)
}

/// Creates or truncates `path` and writes `content` to it.
///
/// New files get mode 0644 on Unix.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let to_error = |source: std::io::Error| Error::Write {
        path: path.display().to_string(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(crate::constants::FILE_MODE);
    }

    let mut file = options.open(path).map_err(to_error)?;
    file.write_all(content.as_bytes()).map_err(to_error)?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Writes the header, then the implementation file.
///
/// A failure on the second write leaves the header in place.
pub fn write_module(target: &ModuleTarget, rendered: &RenderedModule) -> Result<()> {
    write_file(&target.header, &rendered.header)?;
    write_file(&target.source, &rendered.source)
}

/// Generates the module at `module_path` using the rules in `config_path`.
///
/// # Flow
/// 1. Checks that the target directory exists
/// 2. Loads the module rules
/// 3. Renders both files from the header name
/// 4. Writes the header, then the implementation
pub fn generate_module<C: AsRef<Path>>(module_path: &str, config_path: C) -> Result<ModuleTarget> {
    let dir = check_target_dir(module_path)?;
    debug!("Target directory: {}", dir.display());

    let rules = load_rules(config_path)?;
    let target = ModuleTarget::new(module_path);
    let rendered = ModuleRenderer::new(&rules).render(&target.header);

    write_module(&target, &rendered)?;
    Ok(target)
}
