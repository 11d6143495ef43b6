use std::env;

use crate::cli::Cli;
use crate::config::{self, AppPaths, Settings};
use crate::console;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::install;
use crate::output::Output;
use crate::profiles::{KeywordResolver, normalize_keywords};
use crate::shell::ShellCommand;

const UNSET_KEYWORD: &str = "unset";

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        keywords,
        admin,
        console: console_link,
        config: config_override,
        settings: settings_override,
        install: install_requested,
        rc_file,
        verbose: _,
    } = cli;

    let keywords = normalize_keywords(&keywords);
    if !install_requested && (keywords.is_empty() || keywords == [UNSET_KEYWORD]) {
        let settings = AppPaths::discover()
            .and_then(|paths| config::load_settings(&paths, settings_override.as_deref()));
        return Output::new().emit(&unset_command(settings));
    }

    let paths = AppPaths::discover()?;
    let settings = config::load_settings(&paths, settings_override.as_deref())?;
    let output = Output::new();

    if install_requested {
        let rc_file = rc_file.unwrap_or_else(|| paths.rc_file(settings.rc_file()));
        let binary = env::current_exe()?;
        let outcome = install::install(&rc_file, &binary)?;
        return output.line(&outcome.message());
    }

    let ctx = AppContext::bootstrap(&paths, settings, config_override.as_deref())?;
    let command = match switch(&ctx, &keywords, admin, console_link) {
        Ok(command) => command,
        Err(err) if !err.is_fatal() => {
            tracing::debug!(%err, "no profile activated");
            ShellCommand::error(err)
        }
        Err(err) => return Err(err),
    };

    output.emit(&command)
}

/// Clearing the variable never needs the credentials config, and a broken
/// settings file falls back to the default variable name.
pub fn unset_command(settings: AppResult<Settings>) -> ShellCommand {
    match settings {
        Ok(settings) => ShellCommand::unset(settings.env_var()),
        Err(err) => {
            tracing::warn!(%err, "settings unavailable, unsetting the default variable");
            ShellCommand::unset(Settings::default().env_var())
        }
    }
}

/// Resolves keywords to a profile and builds the line that activates it, or
/// the console link for it.
pub fn switch(
    ctx: &AppContext,
    keywords: &[String],
    admin: bool,
    console_link: bool,
) -> AppResult<ShellCommand> {
    let resolver = KeywordResolver::from_settings(&ctx.settings).force_admin(admin);
    let profile = resolver.resolve(keywords, &ctx.catalog)?;
    tracing::info!(profile = profile.id(), "profile matched");

    if console_link {
        let link = console::switch_role_link(profile)?;
        return Ok(ShellCommand::echo(link.as_str()));
    }

    Ok(ShellCommand::export(ctx.settings.env_var(), profile.id()))
}
