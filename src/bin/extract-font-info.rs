//! Report form default and per-field font sizes of a PDF as JSON

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use pdf_font_info::pdf::{extract_font_info, FormFontOutput};

/// Extract form font sizes from a PDF
#[derive(Parser)]
#[command(name = "extract-font-info")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// PDF file to inspect
    pdf_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("Usage: extract-font-info <pdf_path>");
            process::exit(1);
        }
        Err(e) => e.exit(),
    };

    // Extraction failures are reported in the JSON, not the exit code
    let output = FormFontOutput::from(extract_font_info(&cli.pdf_path));
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
