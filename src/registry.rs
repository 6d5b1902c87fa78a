// src/registry.rs

//! The single source of truth for every generated variant.
//!
//! Both axes of the cross-product are declarative: supporting a new host
//! integration or a new shell dialect means adding an entry here (plus a
//! template file for a new dialect) and nothing else. The generation loop in
//! [`crate::core::generator`] never branches on a specific variant.

use crate::models::{EnvironmentSpec, ShellSpec};

/// Host-environment variants, in output order.
pub static ENVIRONMENTS: &[EnvironmentSpec] = &[
    EnvironmentSpec {
        name: "regular",
        crlf_correction: false,
        path_from_native: None,
        path_to_native: None,
        note: regular_note,
    },
    EnvironmentSpec {
        name: "wsl",
        crlf_correction: true,
        path_from_native: Some("wslpath -u"),
        path_to_native: Some("wslpath -w"),
        note: wsl_note,
    },
    EnvironmentSpec {
        name: "cygwin",
        crlf_correction: true,
        path_from_native: Some("cygpath -u"),
        path_to_native: Some("cygpath -w"),
        note: cygwin_note,
    },
];

/// Shell dialects, in output order.
pub static SHELLS: &[ShellSpec] = &[
    ShellSpec {
        display_name: "Bash/Zsh",
        folder: "sh",
        extension: "sh",
        template: "profile.sh",
    },
    ShellSpec {
        display_name: "Fish",
        folder: "fish",
        extension: "fish",
        template: "profile.fish",
    },
];

fn regular_note(shell: &ShellSpec) -> String {
    [
        format!(
            "# NOTE: This particular version is intended for a regular {} environment on *nix systems. If you are running a {}",
            shell.display_name, shell.display_name
        ),
        format!(
            "# environment on Windows (such as Git Bash, WSL or Cygwin), see instead either {}/wsl.sh or {}/cygwin.sh",
            shell.folder, shell.folder
        ),
    ]
    .join("\n")
}

fn wsl_note(_shell: &ShellSpec) -> String {
    "# This version is designed for Windows Subsystem for Linux (WSL)".to_string()
}

fn cygwin_note(_shell: &ShellSpec) -> String {
    "# This version is designed for Cygwin-based environments including Git Bash and MSYS2"
        .to_string()
}
