//! # titlecheck Core
//!
//! Scoring logic for publication title verification. A candidate title is
//! rejected if it contains a denylisted word, or if it is too similar to an
//! existing title by either Metaphone encoding or edit-distance ratio.
//!
//! ## Quick Start
//!
//! ```rust
//! use titlecheck_core::{Status, Verifier};
//!
//! let verifier = Verifier::default();
//! let existing = vec!["Namaskar".to_string(), "The Hindu".to_string()];
//!
//! let result = verifier.verify("Namascar", &existing);
//! assert_eq!(result.status, Status::Rejected);
//! assert_eq!(result.reason, "Too similar to 'Namaskar'");
//! ```
pub mod error;
pub mod scoring;
pub mod types;

// Re-export primary API
pub use error::{Result, TitleCheckError};
pub use scoring::{BestMatch, Policy, Verifier, metaphone, sounds_alike};
pub use types::{Status, VerificationResult};
