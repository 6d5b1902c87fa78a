// src/core/assets.rs

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::constants::{POWERSHELL_OUTPUT, POWERSHELL_TEMPLATE};

/// Copies the PowerShell template verbatim to its destination, overwriting
/// any previous copy.
///
/// PowerShell has no environment variants in the current design, so the file
/// bypasses the renderer entirely. Unlike the rendered outputs, the
/// destination directory is not created here; a missing `powershell/` parent
/// fails the copy.
pub fn copy_static_assets(root: &Path) -> Result<()> {
    let source = root.join(POWERSHELL_TEMPLATE);
    let destination = root.join(POWERSHELL_OUTPUT);
    fs::copy(&source, &destination).with_context(|| {
        format!(
            "Could not copy '{}' to '{}'.",
            source.display(),
            destination.display()
        )
    })?;
    log::debug!("Copied {}", destination.display());
    Ok(())
}
