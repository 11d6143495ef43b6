use url::Url;

use crate::error::{AppError, AppResult};
use crate::profiles::Profile;

const SWITCH_ROLE_URL: &str = "https://signin.aws.amazon.com/switchrole";

/// Builds the AWS console "switch role" link for a profile. The display name
/// is the firm identifier when there is one, else the account name.
pub fn switch_role_link(profile: &Profile) -> AppResult<Url> {
    let role = profile.role_name().ok_or_else(|| missing(profile, "role name"))?;
    let account = profile
        .account_id()
        .ok_or_else(|| missing(profile, "account id"))?;
    let display_name = profile
        .firm_id()
        .or_else(|| profile.account_name())
        .unwrap_or_else(|| profile.id());

    let url = Url::parse_with_params(
        SWITCH_ROLE_URL,
        &[
            ("roleName", role),
            ("account", account),
            ("displayName", display_name),
        ],
    )?;
    Ok(url)
}

fn missing(profile: &Profile, what: &str) -> AppError {
    AppError::Console(format!("profile {} has no {what}", profile.id()))
}
