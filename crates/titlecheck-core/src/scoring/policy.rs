use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TitleCheckError};

/// Words whose presence anywhere in a title rejects it outright.
pub const DEFAULT_DENYLIST: &[&str] = &["Police", "Crime", "Corruption", "CBI", "CID", "Army"];

/// Demo stand-in for production data, scored against only when the store is
/// empty and [`Policy::use_fallback`] is set.
pub const DEMO_FALLBACK_TITLES: &[&str] =
    &["The Hindu", "Times of India", "Indian Express", "Namaskar"];

/// Similarity assigned to a pair whose Metaphone codes match.
pub const DEFAULT_PHONETIC_FLOOR: u8 = 90;

/// Minimum probability for a title to be accepted.
pub const DEFAULT_ACCEPTANCE_THRESHOLD: u8 = 50;

/// Verification policy: the data that decides what gets rejected.
///
/// Every field has a default, so a JSON document only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Case-insensitive substrings that reject a title.
    pub denylist: Vec<String>,
    /// Sample titles used when the store is empty and `use_fallback` is on.
    pub fallback_titles: Vec<String>,
    /// Score against `fallback_titles` when the store is empty.
    pub use_fallback: bool,
    /// Similarity floor for phonetically identical titles.
    pub phonetic_floor: u8,
    /// Minimum acceptance probability, inclusive.
    pub acceptance_threshold: u8,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            denylist: DEFAULT_DENYLIST.iter().map(|w| (*w).to_string()).collect(),
            fallback_titles: DEMO_FALLBACK_TITLES.iter().map(|t| (*t).to_string()).collect(),
            use_fallback: false,
            phonetic_floor: DEFAULT_PHONETIC_FLOOR,
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
        }
    }
}

impl Policy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a policy from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `TitleCheckError::PolicyParse` for malformed JSON and
    /// `TitleCheckError::InvalidPolicy` if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Reads a policy from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `TitleCheckError::PolicyRead` if the file cannot be read, or
    /// any error of [`Policy::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TitleCheckError::PolicyRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks score bounds and rejects blank denylist entries, which would
    /// match every title.
    ///
    /// # Errors
    ///
    /// Returns `TitleCheckError::InvalidPolicy` describing the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.phonetic_floor > 100 {
            return Err(TitleCheckError::InvalidPolicy(format!(
                "phonetic_floor must be at most 100, got {}",
                self.phonetic_floor
            )));
        }
        if self.acceptance_threshold > 100 {
            return Err(TitleCheckError::InvalidPolicy(format!(
                "acceptance_threshold must be at most 100, got {}",
                self.acceptance_threshold
            )));
        }
        if self.denylist.iter().any(|w| w.trim().is_empty()) {
            return Err(TitleCheckError::InvalidPolicy(
                "denylist entries must not be blank".into(),
            ));
        }
        Ok(())
    }

    pub fn with_denylist<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.denylist = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fallback_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_titles = titles.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable the demo fallback pool.
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.use_fallback = enabled;
        self
    }

    pub fn with_phonetic_floor(mut self, floor: u8) -> Self {
        self.phonetic_floor = floor.min(100);
        self
    }

    pub fn with_acceptance_threshold(mut self, threshold: u8) -> Self {
        self.acceptance_threshold = threshold.min(100);
        self
    }
}
