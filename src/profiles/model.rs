use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FIRM_ID: Regex = Regex::new(r"(?i)^[tsf]\d{6}$").unwrap();
    static ref EMBEDDED_FIRM_ID: Regex =
        Regex::new(r"(?i)(?:^|[^a-z0-9])([tsf]\d{6})(?:$|[^a-z0-9])").unwrap();
    static ref ROLE_ARN: Regex =
        Regex::new(r"^arn:[^:]+:iam::(\d{12}):role/(?:.*/)?([^/]+)$").unwrap();
}

/// One named credential configuration.
///
/// `id` is the section name exactly as written, since AWS profile names are
/// case-sensitive. `key` is its lower-cased form used for matching.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Profile {
    id: String,
    key: String,
    is_admin: bool,
    firm_id: Option<String>,
    account_name: Option<String>,
    account_id: Option<String>,
    role_name: Option<String>,
}

impl Profile {
    pub fn new(id: &str, admin_suffix: &str) -> Self {
        let id = id.trim().to_string();
        let key = id.to_lowercase();
        let is_admin = key.ends_with(&admin_suffix.to_lowercase());
        let firm_id = embedded_firm_id(&key);

        Self {
            id,
            key,
            is_admin,
            firm_id,
            account_name: None,
            account_id: None,
            role_name: None,
        }
    }

    pub fn with_account_name(mut self, name: Option<&str>) -> Self {
        self.account_name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        self
    }

    /// Fills in account id and role name from a role ARN such as
    /// `arn:aws:iam::123456789012:role/developer`.
    pub fn with_role_arn(mut self, role_arn: Option<&str>) -> Self {
        if let Some((account_id, role_name)) = role_arn.and_then(parse_role_arn) {
            self.account_id = Some(account_id);
            self.role_name = Some(role_name);
        }
        self
    }

    /// SSO profiles carry the account and role as separate fields; these only
    /// fill gaps left by `role_arn`.
    pub fn with_sso_fields(mut self, account_id: Option<&str>, role_name: Option<&str>) -> Self {
        if self.account_id.is_none() {
            self.account_id = account_id
                .map(str::trim)
                .filter(|id| id.len() == 12 && id.chars().all(|c| c.is_ascii_digit()))
                .map(str::to_string);
        }
        if self.role_name.is_none() {
            self.role_name = role_name
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string);
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn firm_id(&self) -> Option<&str> {
        self.firm_id.as_deref()
    }

    pub fn account_name(&self) -> Option<&str> {
        self.account_name.as_deref()
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    pub fn role_name(&self) -> Option<&str> {
        self.role_name.as_deref()
    }
}

/// True when `token` has the shape of a firm identifier: a class letter
/// (`t`, `s` or `f`) followed by six digits.
pub fn is_firm_identifier(token: &str) -> bool {
    FIRM_ID.is_match(token)
}

fn embedded_firm_id(id: &str) -> Option<String> {
    EMBEDDED_FIRM_ID
        .captures(id)
        .and_then(|captures| captures.get(1))
        .map(|found| found.as_str().to_lowercase())
}

fn parse_role_arn(arn: &str) -> Option<(String, String)> {
    let captures = ROLE_ARN.captures(arn.trim())?;
    Some((captures[1].to_string(), captures[2].to_string()))
}
