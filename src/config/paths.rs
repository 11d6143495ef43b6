use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "awp";
const SETTINGS_FILE: &str = "settings.json";
const AWS_CONFIG_ENV: &str = "AWS_CONFIG_FILE";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    home_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Settings("unable to resolve config directory".to_string()))?;
        let home_dir = dirs::home_dir()
            .ok_or_else(|| AppError::Settings("unable to resolve home directory".to_string()))?;

        Ok(Self::new(config_root.join(APP_DIR), home_dir))
    }

    pub fn new(config_dir: PathBuf, home_dir: PathBuf) -> Self {
        Self {
            config_dir,
            home_dir,
        }
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Credentials config location, honouring `AWS_CONFIG_FILE` before the
    /// settings override and the `~/.aws/config` default.
    pub fn aws_config_file(&self, configured: Option<&Path>) -> PathBuf {
        if let Some(path) = env::var_os(AWS_CONFIG_ENV).filter(|value| !value.is_empty()) {
            return PathBuf::from(path);
        }

        match configured {
            Some(path) => self.expand_home(path),
            None => self.home_dir.join(".aws").join("config"),
        }
    }

    pub fn rc_file(&self, configured: Option<&Path>) -> PathBuf {
        match configured {
            Some(path) => self.expand_home(path),
            None => self.home_dir.join(".zshrc"),
        }
    }

    fn expand_home(&self, path: &Path) -> PathBuf {
        match path.strip_prefix("~") {
            Ok(rest) => self.home_dir.join(rest),
            Err(_) => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> AppPaths {
        AppPaths::new(
            PathBuf::from("/home/dev/.config/awp"),
            PathBuf::from("/home/dev"),
        )
    }

    #[test]
    fn settings_live_in_app_config_dir() {
        assert_eq!(
            paths().settings_file(),
            PathBuf::from("/home/dev/.config/awp/settings.json")
        );
    }

    #[test]
    fn rc_file_defaults_to_zshrc() {
        assert_eq!(paths().rc_file(None), PathBuf::from("/home/dev/.zshrc"));
    }

    #[test]
    fn expands_tilde_in_configured_paths() {
        assert_eq!(
            paths().rc_file(Some(Path::new("~/.bashrc"))),
            PathBuf::from("/home/dev/.bashrc")
        );
        assert_eq!(
            paths().rc_file(Some(Path::new("/etc/zshrc"))),
            PathBuf::from("/etc/zshrc")
        );
    }
}
