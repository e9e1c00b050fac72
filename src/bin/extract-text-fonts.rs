//! Report the fonts selected in a PDF's page content streams as JSON

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use pdf_font_info::pdf::{extract_text_fonts, TextFontOutput};

/// Scan PDF page content for font selections
#[derive(Parser)]
#[command(name = "extract-text-fonts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// PDF file to scan
    pdf_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("Usage: extract-text-fonts <pdf_path>");
            process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let output = TextFontOutput::from(extract_text_fonts(&cli.pdf_path));
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
