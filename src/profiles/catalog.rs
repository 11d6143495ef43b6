use std::collections::{BTreeMap, BTreeSet};

use crate::config::{ConfigSource, Settings};

use super::model::{Profile, is_firm_identifier};

const NAME_FIELD: &str = "name";
const ROLE_ARN_FIELD: &str = "role_arn";
const SSO_ACCOUNT_FIELD: &str = "sso_account_id";
const SSO_ROLE_FIELD: &str = "sso_role_name";

/// Every known profile plus the firm alias table. Built once per invocation
/// and read-only afterwards.
///
/// Profiles are kept sorted by their lower-cased key (then by id), which is
/// the order every query yields them in. Resolution picks the first hit, so this order decides the result
/// when several profiles match.
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    profiles: Vec<Profile>,
    firm_aliases: BTreeMap<String, String>,
    admin_suffix: String,
}

impl ProfileCatalog {
    pub fn new(
        profiles: impl IntoIterator<Item = Profile>,
        firm_aliases: BTreeMap<String, String>,
        admin_suffix: &str,
    ) -> Self {
        let mut by_key = BTreeMap::new();
        for profile in profiles {
            by_key
                .entry((profile.key().to_string(), profile.id().to_string()))
                .or_insert(profile);
        }

        let firm_aliases = firm_aliases
            .into_iter()
            .map(|(key, firm_id)| (key.to_lowercase(), firm_id.to_lowercase()))
            .collect();

        Self {
            profiles: by_key.into_values().collect(),
            firm_aliases,
            admin_suffix: admin_suffix.to_string(),
        }
    }

    pub fn from_source(source: &impl ConfigSource, settings: &Settings) -> Self {
        let admin_suffix = settings.admin_suffix();
        let mut firm_aliases = settings.firm_aliases();

        let profiles: Vec<Profile> = source
            .profile_names()
            .iter()
            .map(|name| {
                Profile::new(name, admin_suffix)
                    .with_account_name(source.field(name, NAME_FIELD))
                    .with_role_arn(source.field(name, ROLE_ARN_FIELD))
                    .with_sso_fields(
                        source.field(name, SSO_ACCOUNT_FIELD),
                        source.field(name, SSO_ROLE_FIELD),
                    )
            })
            .collect();

        // Firm profiles double as alias sources through their display name.
        for profile in profiles.iter().filter(|profile| !profile.is_admin()) {
            if let (Some(name), Some(firm_id)) = (profile.account_name(), profile.firm_id()) {
                let key = name.to_lowercase();
                if key.split_whitespace().count() == 1 && !is_firm_identifier(&key) {
                    firm_aliases.entry(key).or_insert_with(|| firm_id.to_string());
                }
            }
        }

        let catalog = Self::new(profiles, firm_aliases, admin_suffix);
        tracing::debug!(
            profiles = catalog.profiles.len(),
            aliases = catalog.firm_aliases.len(),
            "profile catalog loaded"
        );
        catalog
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn admin_profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter().filter(|profile| profile.is_admin())
    }

    pub fn non_admin_profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter().filter(|profile| !profile.is_admin())
    }

    /// Exact id first, then the first profile whose id matches ignoring case.
    pub fn get(&self, id: &str) -> Option<&Profile> {
        let key = id.to_lowercase();
        self.profiles
            .iter()
            .find(|profile| profile.id() == id)
            .or_else(|| self.profiles.iter().find(|profile| profile.key() == key))
    }

    pub fn resolve_firm_alias(&self, key: &str) -> Option<&str> {
        self.firm_aliases
            .get(&key.to_lowercase())
            .map(String::as_str)
    }

    /// Firm identifiers the catalog knows about, either from a profile id or
    /// as the target of an alias.
    pub fn firm_identifiers(&self) -> BTreeSet<&str> {
        self.profiles
            .iter()
            .filter_map(Profile::firm_id)
            .chain(self.firm_aliases.values().map(String::as_str))
            .collect()
    }

    pub fn is_known_firm_identifier(&self, token: &str) -> bool {
        if !is_firm_identifier(token) {
            return false;
        }

        let token = token.to_lowercase();
        self.firm_identifiers().contains(token.as_str())
    }

    pub fn admin_variant_id(&self, id: &str) -> String {
        format!("{id}{}", self.admin_suffix)
    }

    pub fn admin_variant(&self, profile: &Profile) -> Option<&Profile> {
        if profile.is_admin() {
            return None;
        }
        self.get(&self.admin_variant_id(profile.id()))
    }
}
