//! Command-line interface for stringwrite
//!
//! # Usage Examples
//!
//! ```bash
//! # Print a small column, like the original benchmark harness
//! stringwrite generate --num-strings 3 --min-len 2 --len-mask 1
//!
//! # JSON summary of a larger run
//! stringwrite generate --num-strings 100000 --workers 8 --format json
//!
//! # Show the effective configuration
//! stringwrite config --config column.yaml --seed 7
//! ```

use anyhow::Context;
use arrow::array::Array;
use clap::{Parser, Subcommand, ValueEnum};
use stringwrite::{pipeline, ColumnArgs, GeneratedColumn};

#[derive(Parser)]
#[command(name = "stringwrite")]
#[command(about = "Generate a deterministic column of random strings as an Arrow array")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a column and print it
    Generate {
        #[command(flatten)]
        args: ColumnArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the effective configuration as YAML
    Config {
        #[command(flatten)]
        args: ColumnArgs,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args, format } => {
            let config = args.resolve().context("Failed to load configuration")?;
            let column = pipeline::run(&config).context("Failed to generate column")?;
            match format {
                OutputFormat::Text => print_text(&column),
                OutputFormat::Json => print_json(&column)?,
            }
        }
        Commands::Config { args } => {
            let config = args.resolve().context("Failed to load configuration")?;
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}

fn print_text(column: &GeneratedColumn) {
    let array = &column.array;
    let values = String::from_utf8_lossy(array.value_data());
    let total: i64 = column.lengths.iter().map(|&l| i64::from(l)).sum();

    println!("lengths: {:?}", column.lengths);
    println!("values: {values}");
    println!("sum of lengths: {total}");
    println!("values length: {}", array.value_data().len());
    for i in 0..array.len() {
        println!("{i}: {:?}", array.value(i));
    }
    println!("offsets buffer size: {}", std::mem::size_of_val(array.value_offsets()));
    println!("values buffer size: {}", array.value_data().len());
}

fn print_json(column: &GeneratedColumn) -> anyhow::Result<()> {
    let array = &column.array;
    let metrics = &column.metrics;
    let summary = serde_json::json!({
        "rows": array.len(),
        "chars": metrics.chars,
        "lengths": column.lengths,
        "offsets": array.value_offsets(),
        "values": String::from_utf8_lossy(array.value_data()),
        "metrics": {
            "lengths_ms": metrics.lengths_duration.as_secs_f64() * 1000.0,
            "values_ms": metrics.values_duration.as_secs_f64() * 1000.0,
            "pack_ms": metrics.pack_duration.as_secs_f64() * 1000.0,
            "total_ms": metrics.total_duration.as_secs_f64() * 1000.0,
            "rows_per_second": metrics.rows_per_second(),
            "chars_per_second": metrics.chars_per_second(),
        },
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
    );
    Ok(())
}
