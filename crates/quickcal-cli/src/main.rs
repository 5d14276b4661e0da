//! `quickcal` CLI — generate `.ics` calendar files from JSON event
//! descriptions, and pull dates out of pasted text.
//!
//! ## Usage
//!
//! ```sh
//! # Generate a calendar from a single event (stdin → stdout)
//! echo '{"title":"Team lunch","mode":{"kind":"single","date":"2024-06-01"},"all_day":true}' \
//!   | quickcal generate
//!
//! # Generate from a bulk row list, writing to a file
//! quickcal generate -i rows.json -o events.ics
//!
//! # Let the title pick the filename (prints the path it wrote)
//! quickcal generate -i rows.json --auto
//!
//! # Extract every recognizable date from pasted prose
//! pbpaste | quickcal extract
//!
//! # Parse a one-date-per-line list instead of scanning prose
//! quickcal extract --list -i dates.txt
//!
//! # Print the recap line for a request
//! quickcal recap -i rows.json
//! ```
//!
//! The request JSON is either a single event object or an array of rows;
//! see `quickcal-core` for the exact shape.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quickcal_core::ExportRequest;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "quickcal",
    version,
    about = "Turn event descriptions into .ics calendar files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an .ics document from a JSON event request
    Generate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Derive the output filename from the event title
        #[arg(long, conflicts_with = "output")]
        auto: bool,
    },
    /// Extract every recognizable date from text, one MM/DD/YYYY per line
    Extract {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Treat the input as a one-date-per-line list instead of prose
        #[arg(long)]
        list: bool,
    },
    /// Print the recap line for a JSON event request
    Recap {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output, auto } => {
            let json = read_input(input.as_deref())?;
            let request = parse_request(&json)?;
            let exported = quickcal_core::export(&request)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, exported.ics)
                        .with_context(|| format!("Failed to write file: {}", path))?;
                }
                None if auto => {
                    std::fs::write(&exported.filename, exported.ics)
                        .with_context(|| format!("Failed to write file: {}", exported.filename))?;
                    println!("{}", exported.filename);
                }
                None => {
                    print!("{}", exported.ics);
                }
            }
        }
        Commands::Extract { input, list } => {
            let text = read_input(input.as_deref())?;
            let dates = if list {
                quickcal_core::parse_date_list(&text)
            } else {
                quickcal_core::extract_dates(&text)
            };
            if dates.is_empty() {
                anyhow::bail!(
                    "No valid dates found. Use D/M/YYYY or Month Day (optional weekday/year)."
                );
            }
            println!("{}", quickcal_core::format_date_list(&dates));
        }
        Commands::Recap { input } => {
            let json = read_input(input.as_deref())?;
            let request = parse_request(&json)?;
            let line = match &request {
                ExportRequest::Rows(rows) => quickcal_core::recap_rows(rows),
                ExportRequest::Event(spec) => quickcal_core::recap_spec(spec),
            };
            println!("{line}");
        }
    }

    Ok(())
}

fn parse_request(json: &str) -> Result<ExportRequest> {
    serde_json::from_str(json).context(
        "Failed to parse the event request JSON (expected an event object or an array of rows)",
    )
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
