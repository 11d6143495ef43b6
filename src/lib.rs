pub mod app;
pub mod cli;
pub mod config;
pub mod console;
pub mod context;
pub mod error;
pub mod install;
pub mod logging;
pub mod output;
pub mod profiles;
pub mod shell;

use cli::Cli;
use error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
