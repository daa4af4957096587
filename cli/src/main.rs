use std::io::{self, Read};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `dbconv_core=debug`).
const LOG_ENV: &str = "DBCONV_LOG";

#[derive(Debug, Parser)]
#[command(name = "dbconv", version)]
#[command(about = "Convert database connection strings between tool configs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert dadbod config (from stdin) to sqls config (to stdout).
    DadbodToSqls,
    /// Convert dadbod config (from stdin) to VS Code config (to stdout).
    DadbodToVscode,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::DadbodToSqls => run_dadbod_to_sqls(io::stdin().lock()),
        Command::DadbodToVscode => run_dadbod_to_vscode(io::stdin().lock()),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_dadbod_to_sqls(input: impl Read) -> dbconv_core::Result<String> {
    tracing::debug!("converting dadbod connections to sqls");
    dbconv_core::convert_dadbod_to_sqls(input)
}

fn run_dadbod_to_vscode(input: impl Read) -> dbconv_core::Result<String> {
    tracing::debug!("converting dadbod connections to VS Code profiles");
    dbconv_core::convert_dadbod_to_vscode(input)
}
