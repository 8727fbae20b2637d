#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use output::{CliError, OutputMode, render_error};
use std::env;
use std::process::ExitCode;
use textsim_core::MetricError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "tsim: weighted string-similarity scoring",
    long_about = None
)]
struct Cli {
    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    Compare(cmd::compare::CompareArgs),
    Tokens(cmd::tokens::TokensArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TEXTSIM_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "textsim=debug,info"
        } else {
            "textsim=info,warn"
        })
    });

    let format = env::var("TEXTSIM_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

/// Exit codes: 0 positive verdict (or informational command), 1 negative
/// verdict, 2 error.
fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let output = cli.output_mode();

    let result = match cli.command {
        Commands::Compare(args) => cmd::compare::run_compare(&args, output),
        Commands::Tokens(args) => cmd::tokens::run_tokens(&args, output).map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            // Degenerate-input failures carry a structured code and hint;
            // anything else renders as a bare message.
            let cli_err = err.downcast_ref::<MetricError>().map_or_else(
                || CliError::new(format!("{err:#}")),
                |metric_err| {
                    CliError::with_details(metric_err.to_string(), metric_err.hint(), metric_err.code())
                },
            );
            let _rendered = render_error(output, &cli_err);
            ExitCode::from(2)
        }
    }
}
