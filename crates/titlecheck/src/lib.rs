//! # titlecheck
//!
//! Checks whether a proposed publication title may be registered: it must
//! not contain a restricted word and must not look or sound too much like a
//! title already in the store.
//!
//! ```rust,no_run
//! use titlecheck::{SqliteTitleStore, Verifier, verify_title};
//!
//! let store = SqliteTitleStore::open("titles.db")?;
//! store.add_title("Namaskar")?;
//!
//! let result = verify_title(&store, &Verifier::default(), "Namascar")?;
//! println!("{result}");
//! # Ok::<(), titlecheck::StoreError>(())
//! ```
pub use titlecheck_core::{
    BestMatch, Policy, Status, TitleCheckError, VerificationResult, Verifier, metaphone,
    scoring, sounds_alike, types,
};
pub use titlecheck_store::{DEFAULT_DB_PATH, ImportReport, SqliteTitleStore, StoreError};

use tracing::debug;

/// Verifies `candidate` against the titles currently in `store`.
///
/// The store is only read when the candidate passes the denylist check.
///
/// # Errors
///
/// Returns the store's error if reading the titles fails; storage faults are
/// not retried.
pub fn verify_title(
    store: &SqliteTitleStore,
    verifier: &Verifier,
    candidate: &str,
) -> Result<VerificationResult, StoreError> {
    let result = verifier.verify_with(candidate, || store.list_titles())?;
    debug!(candidate, status = %result.status, probability = result.probability, "verified title");
    Ok(result)
}
