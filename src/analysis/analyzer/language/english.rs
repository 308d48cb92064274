use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::{StemFilter, StemmerKind};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// English tokenize-and-stem pipeline used by the classifier by default.
///
/// `\w+` tokens, lowercased, English stop words removed (unless
/// `keep_stops`), then stemmed.
pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
    keep_stops: bool,
    stemmer: StemmerKind,
}

impl EnglishAnalyzer {
    pub fn new() -> Result<Self> {
        Self::with_options(false, StemmerKind::Porter)
    }

    pub fn with_options(keep_stops: bool, stemmer: StemmerKind) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let mut analyzer =
            PipelineAnalyzer::new(tokenizer).add_filter(Arc::new(LowercaseFilter::new()));
        if !keep_stops {
            analyzer = analyzer.add_filter(Arc::new(StopFilter::new()));
        }
        let analyzer = analyzer
            .add_filter(Arc::new(StemFilter::from_kind(stemmer)))
            .with_name("english");

        Ok(Self {
            inner: analyzer,
            keep_stops,
            stemmer,
        })
    }

    pub fn keep_stops(&self) -> bool {
        self.keep_stops
    }

    pub fn stemmer(&self) -> StemmerKind {
        self.stemmer
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

impl Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("inner", &self.inner)
            .field("keep_stops", &self.keep_stops)
            .finish()
    }
}
