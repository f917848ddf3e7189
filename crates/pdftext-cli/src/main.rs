mod extract;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdftext",
    version,
    about = "Print the extractable text of a PDF file to standard output"
)]
struct Cli {
    /// Path to the PDF file
    pdf_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // The path is optional at the clap level so the missing-argument case
    // gets this exact message and exit code instead of clap's usage error.
    let Some(pdf_file) = cli.pdf_file else {
        eprintln!("--- Error: No PDF file path provided. ---");
        std::process::exit(1);
    };

    if let Err(e) = extract::run(&pdf_file) {
        eprintln!("--- {e} ---");
        std::process::exit(1);
    }
}
