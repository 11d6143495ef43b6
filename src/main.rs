use clap::Parser;

fn main() {
    // Help and parse errors go to stderr: stdout is evaluated by the shell.
    let cli = match awp::cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprint!("{err}");
            std::process::exit(err.exit_code());
        }
    };

    awp::logging::init(cli.verbose);

    if let Err(err) = awp::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
