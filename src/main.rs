use clap::Parser;
use fcmd::{Cli, Driver, RunContext, SearchConfig, reporter::format_fatal};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable controlling log output.
const LOG_ENV: &str = "FCMD_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "warn,fcmd=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    // Usage errors exit here, before the environment is consulted.
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SearchConfig::from_cli(&cli);
    colored::control::set_override(config.color);

    let ctx = RunContext::from_arg0(std::env::args_os().next());
    let search_path = std::env::var_os(&config.path_var);

    let stdout = io::stdout();
    let mut out: Box<dyn Write> = if stdout.is_terminal() {
        Box::new(io::LineWriter::new(stdout.lock()))
    } else {
        Box::new(io::BufWriter::new(stdout.lock()))
    };
    let mut diag = io::stderr().lock();

    match Driver::new(&ctx, &config).run(search_path.as_deref(), &mut out, &mut diag) {
        Ok(summary) => {
            debug!(?summary, "Exiting");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_broken_pipe() => {
            debug!("Output closed by reader");
            ExitCode::SUCCESS
        }
        Err(e) => {
            drop(out);
            if let Err(write_err) = writeln!(diag, "{}", format_fatal(&ctx, &e)) {
                debug!(error = %write_err, "Failed to report fatal error");
            }
            ExitCode::from(&e)
        }
    }
}
