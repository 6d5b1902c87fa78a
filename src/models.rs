// src/models.rs

use serde::Serialize;

/// Describes one host-environment variant a profile script can target
/// (native *nix, WSL, Cygwin, ...).
///
/// All variant-specific behavior lives in this record: a new integration is a
/// new entry in [`crate::registry::ENVIRONMENTS`], never a branch in the
/// generation loop.
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentSpec {
    /// Unique variant name; becomes the output file stem (e.g. `wsl.sh`).
    pub name: &'static str,
    /// Whether the generated script must strip CRLF line endings before use.
    pub crlf_correction: bool,
    /// Command prefix that converts a native OS path into the shell's path
    /// form. Embedded literally into the generated script, never executed by
    /// the generator itself.
    pub path_from_native: Option<&'static str>,
    /// Inverse conversion of `path_from_native`. The two are always both
    /// present or both absent.
    pub path_to_native: Option<&'static str>,
    /// Produces the explanatory banner for this variant, worded for the shell
    /// currently being generated. A plain fn pointer so the registry stays
    /// `'static` data.
    pub note: fn(&ShellSpec) -> String,
}

/// Describes one target shell dialect and where its generated files go.
#[derive(Debug, Clone, Copy)]
pub struct ShellSpec {
    /// Human-readable name used inside generated banners.
    pub display_name: &'static str,
    /// Output directory, relative to the generation root. Unique per dialect.
    pub folder: &'static str,
    /// Extension of generated files, without the leading dot.
    pub extension: &'static str,
    /// Template name, resolved against the template directory.
    pub template: &'static str,
}

/// The data bound into a template for a single (shell, environment) pass.
///
/// Field names serialize to the contract the templates are authored against:
/// `name`, `crlfCorrection`, `pathFromNativeConverter`, `pathToNativeConverter`,
/// `note`. The converter fields are omitted entirely when absent so templates
/// can truthiness-test them (the "regular" variant relies on this).
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext<'a> {
    pub name: &'a str,
    pub crlf_correction: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_from_native_converter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_to_native_converter: Option<&'a str>,
    pub note: String,
}

impl RenderContext<'_> {
    /// Materializes the context for one pair, resolving the environment's
    /// `note` against the shell being generated.
    pub fn for_pair(environment: &EnvironmentSpec, shell: &ShellSpec) -> Self {
        Self {
            name: environment.name,
            crlf_correction: environment.crlf_correction,
            path_from_native_converter: environment.path_from_native,
            path_to_native_converter: environment.path_to_native,
            note: (environment.note)(shell),
        }
    }
}
