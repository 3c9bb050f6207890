use tracing::{debug, warn};

use crate::types::VerificationResult;

use super::lexical;
use super::phonetic::metaphone;
use super::policy::Policy;

/// The title that scored highest during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch<'a> {
    pub title: &'a str,
    pub similarity: u8,
}

/// Stateless title scorer.
///
/// Holds only the policy; the existing titles are borrowed per call, so a
/// single `Verifier` can be shared across threads.
#[derive(Debug, Clone)]
pub struct Verifier {
    policy: Policy,
    denylist_lower: Vec<String>,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new(Policy::default())
    }
}

impl Verifier {
    pub fn new(policy: Policy) -> Self {
        let denylist_lower = policy.denylist.iter().map(|w| w.to_lowercase()).collect();
        Self {
            policy,
            denylist_lower,
        }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Returns the first denylisted word contained in `candidate`, ignoring case.
    #[must_use]
    pub fn restricted_word(&self, candidate: &str) -> Option<&str> {
        let lowered = candidate.to_lowercase();
        self.denylist_lower
            .iter()
            .position(|word| lowered.contains(word.as_str()))
            .map(|idx| self.policy.denylist[idx].as_str())
    }

    /// Verifies `candidate` against a snapshot of existing titles.
    #[must_use]
    pub fn verify(&self, candidate: &str, existing: &[String]) -> VerificationResult {
        if let Some(word) = self.restricted_word(candidate) {
            debug!(candidate, word, "restricted word detected");
            return VerificationResult::restricted();
        }
        self.score(candidate, existing)
    }

    /// Verifies `candidate`, loading existing titles only if the denylist
    /// check passes.
    ///
    /// # Errors
    ///
    /// Propagates whatever error `load` returns.
    pub fn verify_with<E, F>(&self, candidate: &str, load: F) -> Result<VerificationResult, E>
    where
        F: FnOnce() -> Result<Vec<String>, E>,
    {
        if let Some(word) = self.restricted_word(candidate) {
            debug!(candidate, word, "restricted word detected");
            return Ok(VerificationResult::restricted());
        }
        let existing = load()?;
        Ok(self.score(candidate, &existing))
    }

    /// Picks the titles to scan: the demo fallback replaces an empty
    /// snapshot only when the policy enables it.
    fn resolve_pool<'a>(&'a self, existing: &'a [String]) -> &'a [String] {
        if existing.is_empty() && self.policy.use_fallback {
            warn!(
                count = self.policy.fallback_titles.len(),
                "title store is empty; scoring against demo fallback titles"
            );
            self.policy.fallback_titles.as_slice()
        } else {
            existing
        }
    }

    fn score(&self, candidate: &str, existing: &[String]) -> VerificationResult {
        let pool = self.resolve_pool(existing);
        let best = self.best_match(candidate, pool);

        let (similarity, title) = best.map_or((0, ""), |m| (m.similarity, m.title));
        debug!(candidate, pool = pool.len(), similarity, matched = title, "scan complete");

        VerificationResult::from_similarity(similarity, title, self.policy.acceptance_threshold)
    }

    /// Scans `pool` for the title most similar to `candidate`.
    ///
    /// On ties the earliest title in iteration order wins. Returns `None` for
    /// an empty pool.
    #[must_use]
    pub fn best_match<'a>(&self, candidate: &str, pool: &'a [String]) -> Option<BestMatch<'a>> {
        let candidate_code = metaphone(candidate);
        let mut best: Option<BestMatch<'a>> = None;

        for title in pool {
            let similarity = self.pair_similarity(candidate, &candidate_code, title);
            if best.is_none_or(|b| similarity > b.similarity) {
                best = Some(BestMatch {
                    title: title.as_str(),
                    similarity,
                });
            }
        }

        best
    }

    fn pair_similarity(&self, candidate: &str, candidate_code: &str, title: &str) -> u8 {
        let lexical = lexical::ratio(candidate, title);
        if !candidate_code.is_empty() && candidate_code == metaphone(title) {
            lexical.max(self.policy.phonetic_floor)
        } else {
            lexical
        }
    }
}
