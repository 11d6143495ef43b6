use crate::config::Settings;
use crate::error::ResolveError;

use super::catalog::ProfileCatalog;
use super::model::Profile;

const ADMIN_KEYWORD: &str = "admin";

/// Lower-cases raw arguments and splits them on whitespace. Duplicates are
/// kept.
pub fn normalize_keywords<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .flat_map(|arg| arg.as_ref().split_whitespace())
        .map(str::to_lowercase)
        .collect()
}

/// Maps free-text keywords onto exactly one profile of a catalog.
#[derive(Debug, Clone)]
pub struct KeywordResolver {
    single_word_terms: Vec<String>,
    category_tokens: Vec<String>,
    force_admin: bool,
}

impl Default for KeywordResolver {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl KeywordResolver {
    pub fn new(single_word_terms: Vec<String>, category_tokens: Vec<String>) -> Self {
        Self {
            single_word_terms,
            category_tokens,
            force_admin: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.single_word_terms(), settings.category_tokens())
    }

    /// Restricts matching to admin profiles even without an `admin` keyword.
    pub fn force_admin(mut self, force_admin: bool) -> Self {
        self.force_admin = force_admin;
        self
    }

    pub fn resolve<'a>(
        &self,
        keywords: &[String],
        catalog: &'a ProfileCatalog,
    ) -> Result<&'a Profile, ResolveError> {
        let mut keywords = keywords.to_vec();

        let admin_requested = match keywords.iter().position(|keyword| keyword == ADMIN_KEYWORD) {
            Some(position) => {
                keywords.remove(position);
                true
            }
            None => false,
        };
        let admin = admin_requested || self.force_admin;

        if keywords.is_empty() {
            return Err(ResolveError::TooFewKeywords);
        }

        // Checked on the token as typed, before aliases are swapped for firm ids.
        let single_word_allowed = match keywords.as_slice() {
            [keyword] => self.is_single_word_search(keyword, catalog),
            _ => false,
        };

        for keyword in &mut keywords {
            if let Some(firm_id) = catalog.resolve_firm_alias(keyword) {
                *keyword = firm_id.to_string();
            }
        }

        tracing::debug!(?keywords, admin, "resolving keywords");

        if keywords.len() == 1 {
            if !single_word_allowed {
                return Err(ResolveError::TooFewKeywords);
            }
            return first_match(catalog, admin, &keywords);
        }

        let Some(position) = self
            .category_tokens
            .iter()
            .find_map(|token| keywords.iter().position(|keyword| keyword == token))
        else {
            return Err(ResolveError::NoCategoryToken {
                expected: self.category_tokens.clone(),
            });
        };

        let category = keywords.remove(position);
        tracing::debug!(%category, ?keywords, "matching within category");

        first_match(catalog, admin, &keywords)
    }

    fn is_single_word_search(&self, keyword: &str, catalog: &ProfileCatalog) -> bool {
        self.single_word_terms.iter().any(|term| term == keyword)
            || catalog.is_known_firm_identifier(keyword)
            || catalog.resolve_firm_alias(keyword).is_some()
    }
}

/// First profile of the pool, in catalog order, whose lower-cased id contains
/// any of the keywords.
fn first_match<'a>(
    catalog: &'a ProfileCatalog,
    admin: bool,
    keywords: &[String],
) -> Result<&'a Profile, ResolveError> {
    if keywords.is_empty() {
        return Err(ResolveError::TooFewKeywords);
    }

    let matches = |profile: &&Profile| {
        keywords
            .iter()
            .any(|keyword| profile.key().contains(keyword.as_str()))
    };

    let found = if admin {
        catalog.admin_profiles().find(matches)
    } else {
        catalog.non_admin_profiles().find(matches)
    };

    found.ok_or_else(|| ResolveError::NoMatch {
        keywords: keywords.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn catalog() -> ProfileCatalog {
        let ids = [
            "es_legacy",
            "es_legacy_admin",
            "es_lz_main-shared-services",
            "es_lz_main-euwest1-live-app",
            "es_lz_main-euwest1-live-app_admin",
            "es_lz_main-euwest1-live-res",
            "es_lz_main-euwest1-test-res",
            "es_lz_main-euwest1-cust-f100060",
            "es_lz_main-euwest1-cust-f100630",
            "es_lz_main-euwest1-cust-f100630_admin",
        ];
        let aliases = BTreeMap::from([
            ("brown".to_string(), "f100060".to_string()),
            ("voya".to_string(), "f100630".to_string()),
        ]);
        ProfileCatalog::new(
            ids.iter().map(|id| Profile::new(id, "_admin")),
            aliases,
            "_admin",
        )
    }

    fn words(raw: &[&str]) -> Vec<String> {
        normalize_keywords(raw)
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(words(&["Live  APP", " res "]), ["live", "app", "res"]);
    }

    #[test]
    fn single_alias_resolves_to_firm_profile() {
        let catalog = catalog();
        let profile = KeywordResolver::default()
            .resolve(&words(&["voya"]), &catalog)
            .expect("voya should resolve");
        assert_eq!(profile.id(), "es_lz_main-euwest1-cust-f100630");
    }

    #[test]
    fn admin_keyword_switches_pool() {
        let catalog = catalog();
        let profile = KeywordResolver::default()
            .resolve(&words(&["admin", "voya"]), &catalog)
            .expect("admin voya should resolve");
        assert_eq!(profile.id(), "es_lz_main-euwest1-cust-f100630_admin");
    }

    #[test]
    fn forced_admin_matches_admin_keyword() {
        let catalog = catalog();
        let profile = KeywordResolver::default()
            .force_admin(true)
            .resolve(&words(&["legacy"]), &catalog)
            .expect("legacy should resolve");
        assert_eq!(profile.id(), "es_legacy_admin");
    }

    #[test]
    fn generic_single_word_is_rejected() {
        let catalog = catalog();
        let err = KeywordResolver::default()
            .resolve(&words(&["test"]), &catalog)
            .expect_err("test alone is too vague");
        assert_eq!(err, ResolveError::TooFewKeywords);
    }

    #[test]
    fn category_token_is_removed_before_matching() {
        let catalog = catalog();
        let profile = KeywordResolver::default()
            .resolve(&words(&["test", "res"]), &catalog)
            .expect("test res should resolve");
        assert_eq!(profile.id(), "es_lz_main-euwest1-test-res");
    }

    #[test]
    fn missing_category_token_fails() {
        let catalog = catalog();
        let err = KeywordResolver::default()
            .resolve(&words(&["live", "prod"]), &catalog)
            .expect_err("no category token");
        assert!(matches!(err, ResolveError::NoCategoryToken { .. }));
    }

    #[test]
    fn admin_alone_is_too_few_keywords() {
        let catalog = catalog();
        let err = KeywordResolver::default()
            .resolve(&words(&["admin"]), &catalog)
            .expect_err("nothing left to match");
        assert_eq!(err, ResolveError::TooFewKeywords);
    }

    #[test]
    fn repeated_category_token_is_removed_once() {
        let catalog = catalog();
        let profile = KeywordResolver::default()
            .resolve(&words(&["app", "app"]), &catalog)
            .expect("the second app is a search term");
        assert_eq!(profile.id(), "es_lz_main-euwest1-live-app");
    }

    #[test]
    fn repeated_admin_token_is_removed_once() {
        let catalog = catalog();
        let profile = KeywordResolver::default()
            .resolve(&words(&["admin", "admin", "app"]), &catalog)
            .expect("the second admin is a search term");
        assert_eq!(profile.id(), "es_legacy_admin");
    }

    #[test]
    fn configured_alias_key_is_a_single_word_search() {
        let catalog = ProfileCatalog::new(
            ["es-cust-acme01", "es-cust-globex"]
                .iter()
                .map(|id| Profile::new(id, "_admin")),
            BTreeMap::from([("acme".to_string(), "acme01".to_string())]),
            "_admin",
        );
        let profile = KeywordResolver::default()
            .resolve(&words(&["ACME"]), &catalog)
            .expect("alias key should be allowed");
        assert_eq!(profile.id(), "es-cust-acme01");

        let err = KeywordResolver::default()
            .resolve(&words(&["acme01"]), &catalog)
            .expect_err("alias target is not an allowed single word");
        assert_eq!(err, ResolveError::TooFewKeywords);
    }

    #[test]
    fn matches_mixed_case_ids_but_returns_them_verbatim() {
        let catalog = ProfileCatalog::new(
            [Profile::new("es_lz_main-euwest1-cust-F100060", "_admin")],
            BTreeMap::from([("brown".to_string(), "f100060".to_string())]),
            "_admin",
        );
        let profile = KeywordResolver::default()
            .resolve(&words(&["brown"]), &catalog)
            .expect("brown should resolve");
        assert_eq!(profile.id(), "es_lz_main-euwest1-cust-F100060");
    }

    #[test]
    fn allowed_single_word_without_profile_is_no_match() {
        let catalog = catalog();
        let err = KeywordResolver::default()
            .resolve(&words(&["security"]), &catalog)
            .expect_err("no security profile");
        assert_eq!(
            err,
            ResolveError::NoMatch {
                keywords: vec!["security".to_string()]
            }
        );
    }

    #[test]
    fn category_priority_is_configurable() {
        let catalog = catalog();
        let resolver = KeywordResolver::new(Vec::new(), vec!["res".to_string()]);
        let err = resolver
            .resolve(&words(&["live", "app"]), &catalog)
            .expect_err("app is not a category here");
        assert_eq!(
            err,
            ResolveError::NoCategoryToken {
                expected: vec!["res".to_string()]
            }
        );
    }
}
