// src/constants.rs

/// The directory, relative to the generation root, holding the template sources.
pub const TEMPLATE_DIR: &str = "templates";

/// The static PowerShell template, copied verbatim (no rendering pass).
pub const POWERSHELL_TEMPLATE: &str = "templates/profile.ps1";

/// Destination of the PowerShell copy. Its parent directory is expected to
/// exist already; the copy step does not create it.
pub const POWERSHELL_OUTPUT: &str = "powershell/regular.ps1";
