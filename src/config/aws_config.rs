//! Reader for the AWS shared config file (`~/.aws/config`).
//!
//! Only the parts the catalog needs are modelled: `[profile NAME]` and
//! `[default]` sections holding `key = value` properties. Indented lines
//! following a property are sub-properties (e.g. `s3 =` blocks) and are
//! skipped.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::error::{AppError, AppResult};

const PROFILE_PREFIX: &str = "profile";
const DEFAULT_PROFILE: &str = "default";

/// Read-only view over a credentials configuration.
pub trait ConfigSource {
    fn profile_names(&self) -> Vec<String>;
    fn field(&self, profile: &str, field: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ConfigParseError {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct AwsConfigFile {
    profiles: BTreeMap<String, BTreeMap<String, String>>,
}

impl AwsConfigFile {
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|err| {
            AppError::ConfigUnavailable(format!("unable to read {}: {err}", path.display()))
        })?;

        Self::parse(&raw).map_err(|err| {
            AppError::ConfigUnavailable(format!("unable to parse {}: {err}", path.display()))
        })
    }

    pub fn parse(raw: &str) -> Result<Self, ConfigParseError> {
        let mut profiles: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        // `None` while outside a section, `Some(None)` inside a non-profile section.
        let mut current: Option<Option<String>> = None;

        for (index, line) in raw.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            if line.starts_with([' ', '\t']) {
                if current.is_none() {
                    return Err(ConfigParseError {
                        line: line_number,
                        message: "indented line outside of a section".to_string(),
                    });
                }
                continue;
            }

            if let Some(header) = trimmed.strip_prefix('[') {
                let header = section_header(header).ok_or_else(|| ConfigParseError {
                    line: line_number,
                    message: format!("malformed section header `{trimmed}`"),
                })?;
                let name = profile_name(header);
                if let Some(name) = &name {
                    profiles.entry(name.clone()).or_default();
                }
                current = Some(name);
                continue;
            }

            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(ConfigParseError {
                    line: line_number,
                    message: format!("expected `key = value`, found `{trimmed}`"),
                });
            };

            match &current {
                None => {
                    return Err(ConfigParseError {
                        line: line_number,
                        message: "property outside of a section".to_string(),
                    });
                }
                Some(None) => {}
                Some(Some(profile)) => {
                    let key = key.trim().to_lowercase();
                    if key.is_empty() {
                        return Err(ConfigParseError {
                            line: line_number,
                            message: "empty property name".to_string(),
                        });
                    }
                    profiles
                        .entry(profile.clone())
                        .or_default()
                        .insert(key, strip_inline_comment(value.trim()).to_string());
                }
            }
        }

        Ok(Self { profiles })
    }
}

impl ConfigSource for AwsConfigFile {
    fn profile_names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    fn field(&self, profile: &str, field: &str) -> Option<&str> {
        self.profiles
            .get(profile)
            .and_then(|fields| fields.get(&field.to_lowercase()))
            .map(String::as_str)
    }
}

fn profile_name(header: &str) -> Option<String> {
    let header = header.trim();
    if header == DEFAULT_PROFILE {
        return Some(DEFAULT_PROFILE.to_string());
    }

    let rest = header.strip_prefix(PROFILE_PREFIX)?;
    if !rest.starts_with([' ', '\t']) {
        return None;
    }

    let name = rest.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Text between `[` and `]`. Anything after the bracket must be a comment,
/// which in headers needs no leading whitespace.
fn section_header(rest: &str) -> Option<&str> {
    let (header, trailing) = rest.split_once(']')?;
    let trailing = trailing.trim_start();
    (trailing.is_empty() || trailing.starts_with(['#', ';'])).then_some(header)
}

/// In property values `#` and `;` only start a comment when preceded by
/// whitespace, so `name = team#1` keeps its hash.
fn strip_inline_comment(value: &str) -> &str {
    let mut previous = None;
    for (position, c) in value.char_indices() {
        if matches!(c, '#' | ';') && previous.is_some_and(char::is_whitespace) {
            return value[..position].trim_end();
        }
        previous = Some(c);
    }
    value
}
