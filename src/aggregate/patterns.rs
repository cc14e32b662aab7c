// src/aggregate/patterns.rs
//! Compiled regex rule sets for the exclusion and boost stages.

use anyhow::Result;
use regex::Regex;

/// An ordered set of rules compiled from category config strings.
#[derive(Debug, Default)]
pub struct PatternSet {
    rules: Vec<Regex>,
}

impl PatternSet {
    /// Compile every pattern up front. One malformed pattern fails the
    /// whole set; the error names it.
    pub fn compile(patterns: &[String]) -> Result<Self> {
        let rules = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| anyhow::anyhow!("pattern `{}` regex error: {}", p, e))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True if any rule matches anywhere in `text` (search, not full match).
    pub fn matches_any(&self, text: &str) -> bool {
        self.rules.iter().any(|re| re.is_match(text))
    }

    /// Number of distinct rules matching `text`; repeated hits of one rule
    /// still count once.
    pub fn count_matching(&self, text: &str) -> usize {
        self.rules.iter().filter(|re| re.is_match(text)).count()
    }
}
