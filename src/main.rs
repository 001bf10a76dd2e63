use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use clawparse::renderers::PlainRenderer;
use clawparse::Config;

/// Prints the button offsets and prize position of every claw machine in the input,
/// one value per line: X of button A, button B and prize, then the same for Y.
#[derive(Parser, Debug)]
#[command(name = "clawparse", version)]
struct Cli {
    /// Puzzle input file
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config { input: cli.input }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::from(cli);

    let stdout = io::stdout();
    let mut renderer = PlainRenderer::new(stdout.lock());

    clawparse::run(&config, &mut renderer)
        .with_context(|| format!("failed to process {}", config.input.display()))?;

    Ok(())
}
