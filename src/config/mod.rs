pub mod aws_config;
pub mod paths;
pub mod settings;

use std::path::Path;

pub use aws_config::{AwsConfigFile, ConfigSource};
pub use paths::AppPaths;
pub use settings::Settings;

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths, override_path: Option<&Path>) -> AppResult<Settings> {
    match override_path {
        Some(path) => settings::load(path),
        None => settings::load(&paths.settings_file()),
    }
}

pub fn load_aws_config(
    paths: &AppPaths,
    settings: &Settings,
    override_path: Option<&Path>,
) -> AppResult<AwsConfigFile> {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => paths.aws_config_file(settings.config_file()),
    };

    tracing::debug!(path = %path.display(), "reading credentials config");
    AwsConfigFile::load(&path)
}
