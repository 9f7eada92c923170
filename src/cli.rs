extern crate clap;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Checks poems for the AABBA limerick rhyme scheme.
#[derive(Debug, Parser)]
#[command(name = "limerick-bin", version)]
pub struct Cli {
    /// Pronunciation dictionary in CMU format.
    #[arg(
        long,
        short = 'd',
        env = "LIMERICK_DICT",
        default_value = "assets/cmudict.dict"
    )]
    pub dict: PathBuf,

    /// Keep apostrophes inside words, e.g. `don't`.
    #[arg(long, short = 'k')]
    pub keep_apostrophes: bool,

    #[arg(long, short = 'f', value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Defaults to `check`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read a poem from stdin until a blank line and check it.
    Check,

    /// Count syllables of each word.
    Syllables(Syllables),

    /// Check whether two words rhyme.
    Rhymes(Rhymes),
}

#[derive(Debug, Parser)]
pub struct Syllables {
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Guess from spelling instead of the dictionary.
    #[arg(long, short = 's')]
    pub spelling: bool,
}

#[derive(Debug, Parser)]
pub struct Rhymes {
    pub first: String,

    pub second: String,
}
