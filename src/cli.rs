//! Command-line surface for the launcher.

use crate::config::Config;
use crate::launcher;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "estoque-launcher")]
#[command(about = "Launch the Estoque BOSS BLANC inventory app")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Working directory (overrides config)
    #[arg(short = 'C', long, value_name = "DIR")]
    workdir: Option<String>,

    /// Entry-point file to check for and launch (overrides config)
    #[arg(long, value_name = "FILE")]
    target: Option<String>,

    /// Runner command line, target appended (overrides config)
    #[arg(long, value_name = "CMD")]
    runner: Option<String>,

    /// Quiet mode (no banner, no status line)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose mode (info-level logging to stderr)
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Skip the "press Enter" pause on the missing-file error path
    #[arg(long)]
    non_interactive: bool,
}

/// Parse arguments, load config, and run the launch sequence.
/// Returns the process exit code to mirror.
pub async fn run() -> Result<i32> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(workdir) = cli.workdir {
        config.workdir = workdir;
    }
    if let Some(target) = cli.target {
        config.target = target;
    }
    if let Some(runner) = cli.runner {
        config.runner = runner;
    }

    launcher::launch(&config, !cli.non_interactive, cli.quiet).await
}

/// Quiet by default: only wire up tracing when RUST_LOG is set or the
/// operator asked for verbosity, so normal launches stay clean.
fn init_tracing(verbose: bool) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(f) => f,
        Err(_) if verbose => "info".to_string(),
        Err(_) => return,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);
    let filter_layer = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}
