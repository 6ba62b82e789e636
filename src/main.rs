use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reposcan_common::{format_datetime, now, strip_text, BatchConfig, BatchList};
use std::io::{self, BufRead};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reposcan-common", version, about = "Batching, text and date helpers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Group stdin lines into batches and print them as JSON
    Batch {
        /// Items per batch (defaults to $BATCH_SIZE, then 50)
        #[arg(short, long)]
        size: Option<usize>,
    },
    /// Normalize a date/time to ISO-8601
    Format { value: String },
    /// Print the current UTC time as ISO-8601
    Now,
    /// Trim surrounding whitespace
    Strip { text: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Batch { size } => run_batch(size),
        Command::Format { value } => {
            let formatted = format_datetime(value.as_str())
                .with_context(|| format!("Failed to format {:?}", value))?;
            println!("{}", formatted);
            Ok(())
        }
        Command::Now => {
            println!("{}", format_datetime(now())?);
            Ok(())
        }
        Command::Strip { text } => {
            println!("{}", strip_text(Some(text.as_str())).unwrap_or_default());
            Ok(())
        }
    }
}

fn run_batch(size: Option<usize>) -> Result<()> {
    let list = empty_list(size, |key| std::env::var(key).ok())?;
    let list = read_batches(io::stdin().lock(), list)?;

    debug!(
        items = list.len(),
        batches = list.batch_count(),
        "batched stdin"
    );

    println!("{}", render_batches(&list)?);
    Ok(())
}

/// `--size` wins over `BATCH_SIZE`, which wins over the default
fn empty_list<F>(size: Option<usize>, lookup: F) -> Result<BatchList<String>>
where
    F: Fn(&str) -> Option<String>,
{
    match size {
        Some(size) => Ok(BatchList::with_batch_size(size)?),
        None => {
            let config =
                BatchConfig::from_lookup(lookup).context("Failed to read batch configuration")?;
            Ok(BatchList::from_config(&config))
        }
    }
}

/// Add every line as a trimmed item, skipping blank ones
fn read_batches<R: BufRead>(reader: R, mut list: BatchList<String>) -> Result<BatchList<String>> {
    for line in reader.lines() {
        let line = line.context("Failed to read stdin")?;
        if let Some(item) = strip_text(Some(line.as_str())).filter(|s| !s.is_empty()) {
            list.add_item(item);
        }
    }
    Ok(list)
}

fn render_batches(list: &BatchList<String>) -> Result<String> {
    serde_json::to_string_pretty(list).context("Failed to serialize batches")
}
