use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "awp",
    version,
    about = "Switch AWS profiles by keyword",
    after_help = "Examples:\n  awp voya\n  awp live app\n  awp admin test res\n  awp unset"
)]
pub struct Cli {
    #[arg(help = "Keyword(s) found in the profile name, e.g. a firm nickname or `live app`")]
    pub keywords: Vec<String>,
    #[arg(short, long, help = "Switch to the admin variant of the profile")]
    pub admin: bool,
    #[arg(short, long, help = "Print the console switch-role link instead of exporting")]
    pub console: bool,
    #[arg(long, value_name = "PATH", help = "AWS config file to read profiles from")]
    pub config: Option<PathBuf>,
    #[arg(long, value_name = "PATH", help = "Settings file to use")]
    pub settings: Option<PathBuf>,
    #[arg(
        long,
        conflicts_with_all = ["keywords", "admin", "console"],
        help = "Install the awp shell function into your shell startup file"
    )]
    pub install: bool,
    #[arg(
        long,
        value_name = "PATH",
        requires = "install",
        help = "Startup file to install into (defaults to ~/.zshrc)"
    )]
    pub rc_file: Option<PathBuf>,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging on stderr")]
    pub verbose: u8,
}
