use std::{
    io::{stderr, stdout},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;

use driver::Mode;

#[derive(clap::Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print one `KIND lexeme literal` line per scanned token
    Tokenize { file: PathBuf },
    /// Parse a single expression and print its parenthesized form
    Parse { file: PathBuf },
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let (mode, file) = match args.command {
        Command::Tokenize { file } => (Mode::Tokenize, file),
        Command::Parse { file } => (Mode::Parse, file),
    };

    let source = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    log::debug!("Read {} bytes from {}", source.len(), file.display());

    let outcome = driver::run_source(&source, mode, &mut stdout(), &mut stderr())?;
    Ok(ExitCode::from(outcome.exit_code()))
}
