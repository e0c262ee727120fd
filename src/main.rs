//! CLI entry point for the oneM2M attribute short-name extractor.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use onem2m_attrs::{extractor, output, AttributeSet};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "onem2m-attrs")]
#[command(
    author,
    version,
    about = "Extract attribute short names from oneM2M specification documents"
)]
struct Cli {
    /// Output filename for the JSON export
    #[arg(long, short, default_value = "attributes.json")]
    outfile: PathBuf,

    /// Additionally generate one short-name CSV file per input document
    #[arg(long, short)]
    csv: bool,

    /// List all found attributes
    #[arg(long, short)]
    list: bool,

    /// List only duplicate attributes
    #[arg(long, conflicts_with = "list")]
    list_duplicates: bool,

    /// Documents to parse
    #[arg(required = true)]
    documents: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(attrs) => {
            print!("{}", output::render_summary(&attrs));
            if cli.list || cli.list_duplicates {
                print!("{}", output::render_attribute_table(&attrs, cli.list_duplicates));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> onem2m_attrs::Result<AttributeSet> {
    let mut documents = cli.documents.clone();
    documents.sort();

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:<24} [{bar:40.cyan/blue}] {pos}/{len}")
            .expect("valid progress template")
            .progress_chars("#>-"),
    );

    let mut attrs = AttributeSet::new();
    for document in &documents {
        pb.set_message(format!("Processing {}", document.display()));
        extractor::extract_file(document, &mut attrs)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    output::write_json(&attrs, &cli.outfile)?;

    if cli.csv {
        let names: Vec<String> = documents
            .iter()
            .map(|d| d.display().to_string())
            .collect();
        output::write_csv_files(&attrs, &names, &cli.outfile)?;
    }

    Ok(attrs)
}
