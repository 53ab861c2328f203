use thiserror::Error;

/// Scoring failure raised by a [`TitleScorer`].
///
/// The kind name feeds the `Error: <kind>` status string on the
/// corresponding result record, so variants keep short stable names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// A keyword in the configured set is empty. Counting occurrences of
    /// the empty string is meaningless, so it is rejected instead.
    #[error("empty keyword in keyword set")]
    EmptyKeyword,

    /// Catch-all for failures raised by custom scorer implementations.
    #[error("scorer failure: {0}")]
    ScorerFailure(String),
}

impl ScoreError {
    /// Stable kind name used in result status strings.
    pub fn kind(&self) -> &'static str {
        match self {
            ScoreError::EmptyKeyword => "EmptyKeyword",
            ScoreError::ScorerFailure(_) => "ScorerFailure",
        }
    }
}

/// Pluggable scoring function.
///
/// Implementations must be pure: identical arguments return identical
/// scores, and no shared state is touched. Workers call this from
/// multiple threads at once.
pub trait TitleScorer: Send + Sync {
    fn score(&self, text: &str, keywords: &[String]) -> Result<u64, ScoreError>;
}

/// Default scorer: sum of case-insensitive, non-overlapping occurrence
/// counts of each keyword in the text.
pub struct KeywordScorer;

impl TitleScorer for KeywordScorer {
    fn score(&self, text: &str, keywords: &[String]) -> Result<u64, ScoreError> {
        let text_lower = text.to_lowercase();
        let mut total = 0u64;
        for keyword in keywords {
            if keyword.is_empty() {
                return Err(ScoreError::EmptyKeyword);
            }
            let keyword_lower = keyword.to_lowercase();
            total += text_lower.matches(&keyword_lower).count() as u64;
        }
        Ok(total)
    }
}
