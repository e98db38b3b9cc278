//! Include-guard token derivation.

use crate::config::GuardStyle;

/// `/` and the platform separator both split path segments, so results do
/// not depend on where the tool runs.
pub fn is_path_separator(c: char) -> bool {
    c == '/' || std::path::is_separator(c)
}

/// Returns the final segment of `path`, ignoring trailing separators.
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_path_separator);
    match trimmed.rfind(is_path_separator) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Converts a file path into an include-guard token.
///
/// The name is reduced to its last path segment. Unless
/// `style.save_extension` is set, every `.h` in it is removed, wherever it
/// appears (`graphics.hpp` becomes `graphicspp`). Remaining `.` and `-` turn
/// into `_`, and the style's prefix and suffix are wrapped around the result.
pub fn derive_guard(style: &GuardStyle, filename: &str) -> String {
    let mut name = base_name(filename).to_string();

    if !style.save_extension {
        name = name.replace(".h", "");
    }

    let name = name.replace('.', "_").replace('-', "_");
    format!("{}{}{}", style.prefix, name, style.suffix)
}
