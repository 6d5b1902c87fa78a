// src/core/generator.rs

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::{
    constants::TEMPLATE_DIR,
    core::{assets, renderer::Renderer},
    models::RenderContext,
    registry::{ENVIRONMENTS, SHELLS},
};

/// Generates every configured profile script under `root`.
///
/// Walks the cross-product of the shell and environment registries in
/// declaration order and writes one file per pair, then copies the static
/// PowerShell asset. The run is all-or-nothing: the first failure propagates
/// immediately and halts the remaining iterations, leaving any files written
/// so far on disk.
pub fn generate(root: &Path) -> Result<()> {
    let renderer = Renderer::new(&root.join(TEMPLATE_DIR));

    for shell in SHELLS {
        let folder = root.join(shell.folder);
        // Idempotent: an already-existing directory is not an error. Anything
        // else (permissions, a file squatting on the name) is fatal.
        fs::create_dir_all(&folder).with_context(|| {
            format!("Could not create output directory '{}'.", folder.display())
        })?;

        for environment in ENVIRONMENTS {
            let context = RenderContext::for_pair(environment, shell);
            let text = renderer.render(shell.template, &context).with_context(|| {
                format!(
                    "Could not render template '{}' for variant '{}'.",
                    shell.template, environment.name
                )
            })?;

            let output = folder.join(format!("{}.{}", environment.name, shell.extension));
            fs::write(&output, text)
                .with_context(|| format!("Could not write '{}'.", output.display()))?;
            log::debug!("Wrote {}", output.display());
        }
    }

    assets::copy_static_assets(root)?;

    log::info!(
        "Generated {} profile scripts for {} shells.",
        SHELLS.len() * ENVIRONMENTS.len(),
        SHELLS.len()
    );
    Ok(())
}
