//! Text rendering for generated modules.
//! Builds the header stub and the implementation stub from the module rules.
//! Substitution is literal: `$(GUARD)` is the only placeholder.

use log::debug;

use crate::config::ModuleRules;
use crate::constants::GUARD_PLACEHOLDER;
use crate::guard::{base_name, derive_guard};

/// Renders the header file for `filename`.
///
/// The guard is derived from `filename`, and every `$(GUARD)` in the endif
/// comment is replaced with it. Nothing is appended after the comment.
pub fn render_header(rules: &ModuleRules, filename: &str) -> String {
    header_text(rules, &derive_guard(&rules.guard_style, filename))
}

fn header_text(rules: &ModuleRules, guard: &str) -> String {
    let endif = rules.endif_comment.replace(GUARD_PLACEHOLDER, guard);

    format!(
        "{}\n#ifndef {guard}\n#define {guard}\n\n#endif {endif}",
        rules.copyright.join("\n"),
    )
}

/// Renders the implementation file that includes `header_path`.
///
/// The include always names the bare header file, never a directory.
pub fn render_impl(rules: &ModuleRules, header_path: &str) -> String {
    format!(
        "{}\n#include \"{}\"\n",
        rules.copyright.join("\n"),
        base_name(header_path)
    )
}

/// Both texts of one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedModule {
    pub header: String,
    pub source: String,
}

/// Renders module pairs against a fixed set of rules.
pub struct ModuleRenderer<'a> {
    rules: &'a ModuleRules,
}

impl<'a> ModuleRenderer<'a> {
    pub fn new(rules: &'a ModuleRules) -> Self {
        Self { rules }
    }

    /// Renders the header and implementation texts for the header at `header_path`.
    ///
    /// The guard is derived once and shared by both texts.
    pub fn render(&self, header_path: &str) -> RenderedModule {
        let guard = derive_guard(&self.rules.guard_style, header_path);
        debug!("Rendering module for {} (guard {})", header_path, guard);

        RenderedModule {
            header: header_text(self.rules, &guard),
            source: render_impl(self.rules, header_path),
        }
    }
}
