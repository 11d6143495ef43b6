use std::path::Path;

use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::profiles::ProfileCatalog;

/// Everything a switch needs, loaded once at start-up.
#[derive(Debug)]
pub struct AppContext {
    pub settings: Settings,
    pub catalog: ProfileCatalog,
}

impl AppContext {
    pub fn bootstrap(
        paths: &AppPaths,
        settings: Settings,
        config_override: Option<&Path>,
    ) -> AppResult<Self> {
        let source = config::load_aws_config(paths, &settings, config_override)?;
        let catalog = ProfileCatalog::from_source(&source, &settings);

        Ok(Self::new(settings, catalog))
    }

    pub fn new(settings: Settings, catalog: ProfileCatalog) -> Self {
        Self { settings, catalog }
    }
}
