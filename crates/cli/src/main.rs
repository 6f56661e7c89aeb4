use anyhow::{Context, Result};
use catalog::{Catalog, Input};
use clap::Parser;
use colored::Colorize;
use runner::{Dispatcher, VecSink};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

/// streamlog - replay an action log against a media catalog
#[derive(Parser)]
#[command(name = "streamlog")]
#[command(about = "Replays commands, queries and recommendations over a media catalog", long_about = None)]
struct Cli {
    /// Path to the JSON input (dataset + action log)
    #[arg(short, long)]
    input: PathBuf,

    /// Path the JSON result records are written to
    #[arg(short, long, default_value = "results.json")]
    output: PathBuf,

    /// Suppress the run summary on stdout
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let input = Input::from_path(&cli.input)
        .with_context(|| format!("failed to load input from {}", cli.input.display()))?;
    let mut catalog = Catalog::build(&input).context("failed to build catalog")?;
    if !cli.quiet {
        println!(
            "{} Loaded {} shows, {} actors, {} users in {:?}",
            "✓".green(),
            catalog.shows().len(),
            catalog.actors().len(),
            catalog.users().len(),
            start.elapsed()
        );
    }

    let replay_start = Instant::now();
    let mut sink = VecSink::new();
    Dispatcher::new(&mut catalog, &mut sink)
        .run(&input.actions)
        .context("replay aborted")?;
    if !cli.quiet {
        println!(
            "{} Replayed {} actions ({} results) in {:?}",
            "✓".green(),
            input.actions.len(),
            sink.outputs.len(),
            replay_start.elapsed()
        );
    }

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &sink.outputs)
        .context("failed to write results")?;
    if !cli.quiet {
        println!("{} Results written to {}", "✓".green(), cli.output.display());
    }

    Ok(())
}
