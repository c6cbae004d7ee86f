use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pubmed_papers::config::load_config;
use pubmed_papers::output::{print_papers, write_csv, ConsoleFormat};
use pubmed_papers::sources::{collect_papers, PubMedSource};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fetch research papers from PubMed and save their summaries as CSV
#[derive(Parser, Debug)]
#[command(name = "pubmed-papers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetch research papers from PubMed", long_about = None)]
struct Cli {
    /// Search query for PubMed API
    query: String,

    /// Output CSV filename (an empty value prints to the console instead)
    #[arg(long, short, default_value = "results.csv")]
    file: String,

    /// Enable debug mode
    #[arg(long, short)]
    debug: bool,

    /// Print results to the console instead of writing a file
    #[arg(long, short)]
    print: bool,

    /// Console output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Request timeout in seconds (waits indefinitely when unset)
    #[arg(long)]
    timeout: Option<u64>,
}

impl Cli {
    /// Destination file, or `None` when results go to the console
    fn output_path(&self) -> Option<PathBuf> {
        if self.print || self.file.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.file))
        }
    }

    fn console_format(&self) -> ConsoleFormat {
        match self.output {
            OutputFormat::Auto if std::io::stdout().is_terminal() => ConsoleFormat::Table,
            OutputFormat::Auto => ConsoleFormat::Json,
            OutputFormat::Table => ConsoleFormat::Table,
            OutputFormat::Json => ConsoleFormat::Json,
            OutputFormat::Plain => ConsoleFormat::Plain,
        }
    }
}

/// Output format for console results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("pubmed_papers={}", log_level)),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    let mut config = load_config().context("Failed to load configuration")?;
    if let Some(timeout) = cli.timeout {
        config.http.timeout_secs = Some(timeout);
    }

    let source = PubMedSource::new(&config)?;

    // Nothing is written unless both requests succeed.
    let papers = collect_papers(&source, &cli.query).await?;

    match cli.output_path() {
        Some(path) => {
            write_csv(&path, &papers)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Saved results to {}", path.display());
        }
        None => print_papers(&papers, cli.console_format())?,
    }

    Ok(())
}
