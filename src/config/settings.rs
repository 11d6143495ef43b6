use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

const DEFAULT_ENV_VAR: &str = "AWS_PROFILE";
const DEFAULT_ADMIN_SUFFIX: &str = "_admin";
const DEFAULT_SINGLE_WORD_TERMS: &[&str] = &["shared", "primary", "legacy", "log", "security"];
const DEFAULT_CATEGORY_TOKENS: &[&str] = &["app", "res"];

const DEFAULT_FIRM_ALIASES: &[(&str, &str)] = &[
    ("testres1", "t000001"),
    ("testres2", "t000002"),
    ("essentiademo", "f100580"),
    ("testres0", "f000000"),
    ("artemis", "f100030"),
    ("brown", "f100060"),
    ("nnip", "f100340"),
    ("bellrock", "f100360"),
    ("morganst", "f100420"),
    ("trs", "f100440"),
    ("amiral", "f100470"),
    ("ab", "f100530"),
    ("aperture", "f100560"),
    ("carmignac", "f100570"),
    ("iridian", "f100590"),
    ("janush", "f100600"),
    ("voya", "f100630"),
    ("invesco", "f100640"),
    ("cdpq2020", "f100670"),
    ("artisan", "f100680"),
    ("pzena", "f100690"),
    ("baird", "f100700"),
    ("deka", "f100720"),
    ("thunderbird", "f100730"),
    ("hca", "f100740"),
    ("adams", "f100750"),
    ("hermes2021", "f100760"),
    ("dws", "f100770"),
    ("blacksheep", "f100780"),
    ("kadensa", "f100790"),
    ("odey", "f100800"),
    ("wheb", "f100810"),
    ("g2", "f100820"),
    ("viewforth2021", "f100830"),
    ("evergreen", "f100840"),
    ("pm", "f100850"),
    ("amundi", "f100860"),
    ("brookfield", "f100870"),
    ("massave", "f100880"),
    ("2xideas", "f100890"),
    ("fam", "f100900"),
];

/// User overrides read from `settings.json`. Every field is optional; the
/// accessors fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub env_var: Option<String>,
    #[serde(default)]
    pub admin_suffix: Option<String>,
    #[serde(default)]
    pub config_file: Option<PathBuf>,
    #[serde(default)]
    pub rc_file: Option<PathBuf>,
    #[serde(default)]
    pub firm_aliases: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub single_word_terms: Option<Vec<String>>,
    #[serde(default)]
    pub category_tokens: Option<Vec<String>>,
}

impl Settings {
    pub fn env_var(&self) -> &str {
        self.env_var.as_deref().unwrap_or(DEFAULT_ENV_VAR)
    }

    pub fn admin_suffix(&self) -> &str {
        self.admin_suffix.as_deref().unwrap_or(DEFAULT_ADMIN_SUFFIX)
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn rc_file(&self) -> Option<&Path> {
        self.rc_file.as_deref()
    }

    /// Alias keys are lower-cased so lookups can be case-insensitive.
    pub fn firm_aliases(&self) -> BTreeMap<String, String> {
        match &self.firm_aliases {
            Some(aliases) => aliases
                .iter()
                .map(|(key, firm_id)| (key.to_lowercase(), firm_id.to_lowercase()))
                .collect(),
            None => DEFAULT_FIRM_ALIASES
                .iter()
                .map(|(key, firm_id)| (key.to_string(), firm_id.to_string()))
                .collect(),
        }
    }

    pub fn single_word_terms(&self) -> Vec<String> {
        lowered_or_default(self.single_word_terms.as_deref(), DEFAULT_SINGLE_WORD_TERMS)
    }

    /// Category tokens in priority order.
    pub fn category_tokens(&self) -> Vec<String> {
        lowered_or_default(self.category_tokens.as_deref(), DEFAULT_CATEGORY_TOKENS)
    }

    fn validate(&self) -> AppResult<()> {
        if let Some(var) = &self.env_var {
            let valid = !var.is_empty()
                && !var.starts_with(|c: char| c.is_ascii_digit())
                && var.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid {
                return Err(AppError::Settings(format!(
                    "env_var `{var}` is not a valid shell variable name"
                )));
            }
        }

        if self.admin_suffix.as_deref() == Some("") {
            return Err(AppError::Settings(
                "admin_suffix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn lowered_or_default(configured: Option<&[String]>, defaults: &[&str]) -> Vec<String> {
    match configured {
        Some(values) => values.iter().map(|value| value.to_lowercase()).collect(),
        None => defaults.iter().map(|value| value.to_string()).collect(),
    }
}

pub fn load(path: &Path) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&raw).map_err(|err| {
        AppError::Settings(format!("unable to parse {}: {err}", path.display()))
    })?;
    settings.validate()?;
    Ok(settings)
}
