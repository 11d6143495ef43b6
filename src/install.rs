//! Installs the `awp` shell function into a shell startup file.
//!
//! A child process cannot change its parent's environment, so the function
//! evaluates whatever line the binary prints.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::shell::single_quote;

pub const FUNCTION_NAME: &str = "awp";

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InstallOutcome {
    Installed(PathBuf),
    AlreadyInstalled(PathBuf),
}

impl InstallOutcome {
    pub fn message(&self) -> String {
        match self {
            Self::Installed(path) => {
                format!("{FUNCTION_NAME} was successfully installed to {}", path.display())
            }
            Self::AlreadyInstalled(path) => {
                format!("{FUNCTION_NAME} is already installed in {}", path.display())
            }
        }
    }
}

pub fn function_snippet(binary: &Path) -> String {
    let binary = single_quote(&binary.display().to_string());
    format!("function {FUNCTION_NAME} {{\n  eval \"$({binary} \"$@\")\"\n}}\n")
}

pub fn install(rc_file: &Path, binary: &Path) -> AppResult<InstallOutcome> {
    let existing = if rc_file.exists() {
        fs::read_to_string(rc_file).map_err(|err| install_error(rc_file, err))?
    } else {
        String::new()
    };

    let header = format!("function {FUNCTION_NAME} {{");
    if existing.lines().any(|line| line.trim() == header) {
        tracing::info!(path = %rc_file.display(), "shell function already present");
        return Ok(InstallOutcome::AlreadyInstalled(rc_file.to_path_buf()));
    }

    if let Some(parent) = rc_file.parent() {
        fs::create_dir_all(parent).map_err(|err| install_error(rc_file, err))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(rc_file)
        .map_err(|err| install_error(rc_file, err))?;

    let separator = if existing.is_empty() || existing.ends_with('\n') {
        "\n"
    } else {
        "\n\n"
    };
    write!(file, "{separator}{}", function_snippet(binary))
        .map_err(|err| install_error(rc_file, err))?;

    tracing::info!(path = %rc_file.display(), "shell function installed");
    Ok(InstallOutcome::Installed(rc_file.to_path_buf()))
}

fn install_error(path: &Path, err: std::io::Error) -> AppError {
    AppError::Install(format!("{}: {err}", path.display()))
}
