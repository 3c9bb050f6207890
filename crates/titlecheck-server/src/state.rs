use std::sync::Arc;

use titlecheck::{SqliteTitleStore, StoreError, VerificationResult, Verifier, verify_title};

/// Dependencies shared by every request handler.
///
/// The store and verifier are passed in explicitly so tests can point the
/// router at a fixture database.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<SqliteTitleStore>,
    verifier: Arc<Verifier>,
}

impl AppState {
    pub fn new(store: SqliteTitleStore, verifier: Verifier) -> Self {
        Self {
            store: Arc::new(store),
            verifier: Arc::new(verifier),
        }
    }

    pub fn store(&self) -> &SqliteTitleStore {
        &self.store
    }

    pub fn verifier(&self) -> &Verifier {
        &self.verifier
    }

    /// Reads the current titles and scores `candidate` against them.
    /// Blocks on SQLite I/O.
    pub fn verify(&self, candidate: &str) -> Result<VerificationResult, StoreError> {
        verify_title(&self.store, &self.verifier, candidate)
    }
}
