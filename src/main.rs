//! csvexport - JSON records to spreadsheet-friendly delimited text

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use csvexport::{ExportConfig, Exporter};

/// Convert a JSON array of objects into spreadsheet-friendly delimited text
#[derive(Parser, Debug)]
#[command(name = "csvexport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file containing a JSON array of objects (stdin if omitted)
    input: Option<PathBuf>,

    /// Field delimiter
    #[arg(short, long, default_value = ",")]
    delimiter: String,

    /// Omit the header line
    #[arg(long)]
    no_header: bool,

    /// Omit the sep= preamble line
    #[arg(long)]
    no_preamble: bool,

    /// Append output to this file instead of writing to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// With --output: continuation append, never emits the preamble
    #[arg(long, requires = "output")]
    append: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let raw = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let records: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(&raw).context("Input must be a JSON array of objects")?;

    let config = ExportConfig::default()
        .with_delimiter(cli.delimiter)
        .with_preamble(!cli.no_preamble);
    let mut exporter = Exporter::with_config(config);
    exporter.add_records(records)?;

    let include_header = !cli.no_header;
    match cli.output {
        Some(path) if cli.append => exporter.append_lines_to_file(&path, include_header)?,
        Some(path) => exporter.export_to_file(&path, include_header)?,
        None => print!("{}", exporter.export_to_text(include_header)),
    }

    Ok(())
}
