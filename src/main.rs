use std::{path::PathBuf, process::ExitCode};

use clap::{error::ErrorKind, Parser};
use paper_check::{
    config::Config,
    document::read_document,
    error::{Error, Result},
    logging::init_tracing,
    report::write_result,
    PaperChecker,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the original document
    original: PathBuf,

    /// Path to the candidate document checked against the original
    candidate: PathBuf,

    /// Path the similarity percentage is written to
    result: PathBuf,

    /// JSON file overriding stopwords, punctuation and cache size
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also report the Jaccard similarity of the two vocabularies
    #[arg(long, default_value = "false")]
    jaccard: bool,
}

fn parse_args() -> Result<Args> {
    Args::try_parse().map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => Error::InvalidArguments(e.to_string()),
    })
}

fn run() -> Result<()> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    let checker = PaperChecker::with_tokenizer(config.tokenizer()?);

    let original = read_document(&args.original)?;
    let candidate = read_document(&args.candidate)?;

    // Time the check
    let start = std::time::Instant::now();
    let result = checker.check(&original, &candidate);
    info!(
        similarity = %result.cosine,
        elapsed = ?start.elapsed(),
        "check finished"
    );
    if args.jaccard {
        info!(jaccard = %result.jaccard, "vocabulary overlap");
    }

    write_result(&args.result, result.cosine)?;
    println!("similarity: {}", result.cosine);

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
