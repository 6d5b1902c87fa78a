// src/core/renderer.rs

use std::path::Path;

use minijinja::Environment;
use thiserror::Error;

use crate::models::RenderContext;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template Error: {0}")]
    Template(#[from] minijinja::Error),
}

/// A template engine wrapper configured for generating executable shell source.
///
/// Three settings are load-bearing for byte fidelity of the output:
/// block-line whitespace stripping (`lstrip_blocks`), newline trimming after
/// block tags (`trim_blocks`), and no output escaping. Disabling any of them
/// would corrupt indentation or inject escaped characters into script text.
pub struct Renderer {
    env: Environment<'static>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}

impl Renderer {
    /// Creates a renderer resolving template names against `template_root`.
    pub fn new(template_root: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(template_root));
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        // The engine trims one trailing newline by default; shell scripts
        // must end exactly as authored.
        env.set_keep_trailing_newline(true);
        // Output is script source, not markup.
        env.set_auto_escape_callback(|_name| minijinja::AutoEscape::None);
        Self { env }
    }

    /// Renders `template` (a name under the template root) with the given
    /// per-pair context.
    ///
    /// Fails when the template file does not exist or when rendering itself
    /// errors; absent optional context fields are not an error and simply
    /// test falsy inside the template.
    pub fn render(
        &self,
        template: &str,
        context: &RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(template)?;
        Ok(tmpl.render(context)?)
    }
}
