use limerick::{LimerickDetector, PronunciationLookup};
use serde::Serialize;

use crate::{
    cli::Format,
    error::{ConfigError, Error},
};

pub trait Render: Serialize {
    fn text(&self) -> String;

    fn render(&self, format: Format) -> Result<String, Error> {
        match format {
            Format::Text => Ok(self.text()),
            Format::Json => serde_json::to_string_pretty(self)
                .map_err(|error| ConfigError::Serialization(error.to_string()).into()),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RhymeCheck {
    /// One-based line numbers.
    pub lines: (usize, usize),
    pub words: (String, String),
    pub rhymes: bool,
}

#[derive(Debug, Serialize)]
pub struct LimerickReport {
    pub poem: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,

    pub checks: Vec<RhymeCheck>,
    pub limerick: bool,
}

impl LimerickReport {
    /// Evaluates every AABBA pair so each one can be reported.
    pub fn new<L: PronunciationLookup>(detector: &LimerickDetector<L>, poem: &str) -> Self {
        let poem = poem.trim().to_string();

        match detector.limerick(&poem) {
            Ok(limerick) => {
                let words = limerick.words();
                let checks = limerick
                    .checks(detector.lookup())
                    .map(|(first, second, rhymes)| RhymeCheck {
                        lines: (first + 1, second + 1),
                        words: (words[first].clone(), words[second].clone()),
                        rhymes,
                    })
                    .collect::<Vec<_>>();
                let limerick = checks.iter().all(|check| check.rhymes);

                Self {
                    poem,
                    rejected: None,
                    checks,
                    limerick,
                }
            }
            Err(error) => Self {
                poem,
                rejected: Some(error.to_string()),
                checks: Vec::new(),
                limerick: false,
            },
        }
    }
}

impl Render for LimerickReport {
    fn text(&self) -> String {
        format!("{}\n-----------\n{}", self.poem, self.limerick)
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Syllables {
    pub word: String,
    pub syllables: usize,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SyllablesReport(pub Vec<Syllables>);

impl Render for SyllablesReport {
    fn text(&self) -> String {
        self.0
            .iter()
            .map(|entry| format!("{}\t{}", entry.word, entry.syllables))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Serialize)]
pub struct RhymeReport {
    pub first: String,
    pub second: String,
    pub rhymes: bool,
}

impl Render for RhymeReport {
    fn text(&self) -> String {
        format!("{} / {}: {}", self.first, self.second, self.rhymes)
    }
}
