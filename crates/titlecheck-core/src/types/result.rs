use serde::{Deserialize, Serialize};

/// Reason reported when a candidate contains a denylisted word.
pub const RESTRICTED_REASON: &str = "Restricted word detected.";

/// Reason reported when a candidate clears every check.
pub const ACCEPTED_REASON: &str = "Title is unique!";

/// Outcome of a title verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Accepted,
    Rejected,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted => write!(f, "Accepted"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

/// The decision record produced for every verification request.
///
/// Transient: built per request and discarded once the response is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether the title may be registered.
    pub status: Status,

    /// Likelihood of acceptance in `[0, 100]`.
    pub probability: u8,

    /// Highest similarity to any existing title in `[0, 100]`.
    pub similarity: u8,

    /// Human-readable explanation.
    pub reason: String,
}

impl VerificationResult {
    /// Result for a candidate that contains a denylisted word.
    #[must_use]
    pub fn restricted() -> Self {
        Self {
            status: Status::Rejected,
            probability: 0,
            similarity: 0,
            reason: RESTRICTED_REASON.to_string(),
        }
    }

    /// Turns the best similarity found during a scan into a decision.
    ///
    /// `probability = 100 - similarity`; the title is accepted when the
    /// probability reaches `acceptance_threshold`.
    #[must_use]
    pub fn from_similarity(similarity: u8, matched: &str, acceptance_threshold: u8) -> Self {
        let similarity = similarity.min(100);
        let probability = 100u8.saturating_sub(similarity);

        if probability >= acceptance_threshold {
            Self {
                status: Status::Accepted,
                probability,
                similarity,
                reason: ACCEPTED_REASON.to_string(),
            }
        } else {
            Self {
                status: Status::Rejected,
                probability,
                similarity,
                reason: format!("Too similar to '{matched}'"),
            }
        }
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == Status::Accepted
    }
}

impl std::fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (probability={}, similarity={}): {}",
            self.status, self.probability, self.similarity, self.reason
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restricted_result_is_rejected_with_zero_probability() {
        let result = VerificationResult::restricted();
        assert_eq!(result.status, Status::Rejected);
        assert_eq!(result.probability, 0);
        assert_eq!(result.similarity, 0);
        assert_eq!(result.reason, RESTRICTED_REASON);
    }

    #[test]
    fn threshold_is_inclusive() {
        let result = VerificationResult::from_similarity(50, "Namaskar", 50);
        assert_eq!(result.probability, 50);
        assert!(result.is_accepted());
        assert_eq!(result.reason, ACCEPTED_REASON);

        let result = VerificationResult::from_similarity(51, "Namaskar", 50);
        assert_eq!(result.probability, 49);
        assert_eq!(result.status, Status::Rejected);
        assert_eq!(result.reason, "Too similar to 'Namaskar'");
    }

    #[test]
    fn similarity_above_hundred_is_clamped() {
        let result = VerificationResult::from_similarity(140, "The Hindu", 50);
        assert_eq!(result.similarity, 100);
        assert_eq!(result.probability, 0);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let result = VerificationResult::from_similarity(90, "Namaskar", 50);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["status"], "Rejected");
        assert_eq!(json["probability"], 10);
        assert_eq!(json["similarity"], 90);
        assert_eq!(json["reason"], "Too similar to 'Namaskar'");
    }

    #[test]
    fn display_mentions_status_and_reason() {
        let display = VerificationResult::restricted().to_string();
        assert!(display.starts_with("Rejected"));
        assert!(display.contains(RESTRICTED_REASON));
    }
}
