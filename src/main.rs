extern crate limerick;
extern crate tokio;

mod cli;
mod error;
mod read;
mod report;

use std::{path::Path, process::ExitCode};

use clap::Parser;
use limerick::{
    normalizer::Lowercase, Dictionary, LimerickDetector, LineExtractor, Spelling, SyllableCounter,
};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Command},
    error::Error,
    read::{read_poem, FileReader},
    report::{LimerickReport, Render, RhymeReport, Syllables, SyllablesReport},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "limerick-bin failed");
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn load_dictionary(path: &Path) -> Result<Dictionary, Error> {
    let mut buffer = String::new();
    let mut reader = FileReader::new();

    reader.open(path).await?;
    reader.read_into(&mut buffer).await?;

    let dictionary = Dictionary::parse(&buffer)?;
    tracing::info!(path = %reader.path().display(), words = dictionary.len(), "loaded dictionary");

    Ok(dictionary)
}

async fn run(cli: Cli) -> Result<String, Error> {
    let mut extractor = if cli.keep_apostrophes {
        LineExtractor::keep_inner_apostrophes()
    } else {
        LineExtractor::default()
    };
    extractor.pipeline_mut().insert(Box::new(Lowercase::new()));

    match cli.command.unwrap_or(Command::Check) {
        Command::Check => {
            let dictionary = load_dictionary(&cli.dict).await?;
            let detector = LimerickDetector::with_extractor(dictionary, extractor);

            let poem = read_poem(BufReader::new(tokio::io::stdin())).await?;
            LimerickReport::new(&detector, &poem).render(cli.format)
        }

        Command::Syllables(args) => {
            let counter: Box<dyn SyllableCounter> = if args.spelling {
                Box::new(Spelling::new())
            } else {
                let dictionary = load_dictionary(&cli.dict).await?;
                Box::new(LimerickDetector::with_extractor(dictionary, extractor))
            };

            let report = args
                .words
                .iter()
                .map(|word| {
                    let word = word.to_ascii_lowercase();
                    let syllables = counter.count(&word);
                    Syllables { word, syllables }
                })
                .collect::<Vec<_>>();

            SyllablesReport(report).render(cli.format)
        }

        Command::Rhymes(args) => {
            let dictionary = load_dictionary(&cli.dict).await?;
            let detector = LimerickDetector::with_extractor(dictionary, extractor);

            let first = args.first.to_ascii_lowercase();
            let second = args.second.to_ascii_lowercase();
            let rhymes = detector.rhymes(&first, &second);

            RhymeReport {
                first,
                second,
                rhymes,
            }
            .render(cli.format)
        }
    }
}
