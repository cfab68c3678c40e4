use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scanner::{display_error, scan_with, ScanConfig};

/// Scan a source file and print its tokens, one per line.
#[derive(Parser, Debug)]
#[command(name = "scanner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a source file", long_about = None)]
struct Cli {
    /// Source file to scan, or `-` to read standard input
    file: PathBuf,

    /// Emit `==`, `!=`, `<=` and `>=` as single operator tokens
    #[arg(long)]
    compound_operators: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Disable color output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let (source, file_name) = read_source(&cli.file)?;
    let config = ScanConfig::new().with_compound_operators(cli.compound_operators);

    let start = Instant::now();
    let tokens = match scan_with(&source, &config) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, &file_name);
            return Ok(ExitCode::FAILURE);
        }
    };

    info!("Tokenized {} in {:?}", file_name, start.elapsed());

    let mut stdout = io::stdout().lock();
    for token in &tokens {
        writeln!(stdout, "{}", token).context("failed to write tokens")?;
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

fn read_source(path: &Path) -> Result<(String, String)> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read standard input")?;
        return Ok((source, String::from("<stdin>")));
    }

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok((source, file_name))
}
