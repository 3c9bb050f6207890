use std::path::{Path, PathBuf};

use rusqlite::{Connection, ErrorCode, params};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, StoreError};

/// Default database location, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "titles.db";

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS titles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT UNIQUE NOT NULL
    )
";

/// Outcome of a bulk import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Titles written to the store.
    pub inserted: usize,
    /// Titles already present (including repeats within the batch).
    pub skipped: usize,
}

/// Store of registered titles backed by a single SQLite table.
///
/// Only the database location is held; every operation opens its own
/// connection, so the store can be shared freely between request handlers.
#[derive(Debug, Clone)]
pub struct SqliteTitleStore {
    path: PathBuf,
}

impl SqliteTitleStore {
    /// Opens the store at `path`, creating the table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Sqlite` if the database cannot be opened or the
    /// schema cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Creates the titles table if it is missing. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Sqlite` on any database failure.
    pub fn initialize(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.execute_batch(SCHEMA)?;
        debug!(path = %self.path.display(), "title store initialized");
        Ok(())
    }

    /// Returns every stored title, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Sqlite` on any database failure.
    pub fn list_titles(&self) -> Result<Vec<String>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT title FROM titles")?;
        let titles = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(titles)
    }

    /// Inserts `title` verbatim.
    ///
    /// Returns `Ok(false)` when the exact text is already stored. No case or
    /// whitespace normalization happens before the uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyTitle` for an empty string and
    /// `StoreError::Sqlite` on any other database failure.
    pub fn add_title(&self, title: &str) -> Result<bool> {
        let conn = self.connect()?;
        insert_title(&conn, title)
    }

    /// Inserts many titles in a single transaction.
    ///
    /// Duplicates are counted as skipped. An empty string aborts the whole
    /// batch and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyTitle` for an empty string and
    /// `StoreError::Sqlite` on any other database failure.
    pub fn add_titles<I, S>(&self, titles: I) -> Result<ImportReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let mut report = ImportReport::default();

        for title in titles {
            if insert_title(&tx, title.as_ref())? {
                report.inserted += 1;
            } else {
                report.skipped += 1;
            }
        }

        tx.commit()?;
        info!(
            inserted = report.inserted,
            skipped = report.skipped,
            "imported titles"
        );
        Ok(report)
    }

    /// Number of stored titles.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Sqlite` on any database failure.
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM titles", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

fn insert_title(conn: &Connection, title: &str) -> Result<bool> {
    if title.is_empty() {
        return Err(StoreError::EmptyTitle);
    }

    match conn.execute("INSERT INTO titles (title) VALUES (?1)", params![title]) {
        Ok(_) => Ok(true),
        Err(err) if is_unique_violation(&err) => {
            debug!(title, "duplicate title rejected");
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_local() {
        assert_eq!(DEFAULT_DB_PATH, "titles.db");
    }

    #[test]
    fn import_report_defaults_to_zero() {
        let report = ImportReport::default();
        assert_eq!(report.inserted, 0);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn other_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&rusqlite::Error::QueryReturnedNoRows));
    }
}
