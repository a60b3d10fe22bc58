//! In-memory redirect table persisted to a JSON file.

use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::utils::id_generator::{IdGenerator, RandomIdGenerator};

/// Attempts at generating a fresh id before giving up.
const MAX_GENERATE_ATTEMPTS: usize = 5;

/// Redirect table backed by a single JSON file.
///
/// Lookups read the in-memory map; every successful create rewrites the file
/// before the call returns, so the file always reflects the served table.
/// The persisted form is a pretty-printed JSON object with keys in sorted
/// order, which keeps diffs between revisions readable.
pub struct RedirectStore {
    path: PathBuf,
    table: RwLock<HashMap<String, String>>,
    id_generator: Box<dyn IdGenerator>,
}

impl RedirectStore {
    /// Creates a store persisting to `path`, using the system RNG for ids.
    ///
    /// The table starts empty; call [`RedirectStore::load`] to read the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_id_generator(path, Box::new(RandomIdGenerator))
    }

    /// Creates a store with a custom id generator.
    pub fn with_id_generator(path: impl Into<PathBuf>, id_generator: Box<dyn IdGenerator>) -> Self {
        Self {
            path: path.into(),
            table: RwLock::new(HashMap::new()),
            id_generator,
        }
    }

    /// Loads the redirect table from disk, replacing the in-memory state.
    ///
    /// Fail-open: a missing or unreadable file starts the service with an
    /// empty table, as does a file that fails to parse. Returns the number
    /// of entries loaded.
    pub async fn load(&self) -> usize {
        let entries = match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<HashMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        path = %self.path.display(),
                        "failed to parse redirect table, starting empty"
                    );
                    HashMap::new()
                }
            },
            Err(e) => {
                tracing::info!(
                    error = %e,
                    path = %self.path.display(),
                    "redirect table not readable, starting empty"
                );
                HashMap::new()
            }
        };

        let mut table = self.table.write().await;
        *table = entries;
        table.len()
    }

    /// Looks up the target URL for a redirect id.
    pub async fn get(&self, id: &str) -> Option<String> {
        let table = self.table.read().await;
        table.get(id).cloned()
    }

    /// Returns the full table with keys in sorted order.
    pub async fn list(&self) -> BTreeMap<String, String> {
        let table = self.table.read().await;
        table
            .iter()
            .map(|(id, url)| (id.clone(), url.clone()))
            .collect()
    }

    /// Returns a one-entry view of the table for `id`.
    ///
    /// The target is `None` when the id is unknown, so callers can hand the
    /// result out as-is without exposing the rest of the table.
    pub async fn list_one(&self, id: &str) -> BTreeMap<String, Option<String>> {
        let table = self.table.read().await;
        BTreeMap::from([(id.to_string(), table.get(id).cloned())])
    }

    /// Creates a redirect and persists the table.
    ///
    /// With an explicit id the slot must be vacant; without one a fresh id
    /// is generated, retrying on collision. The conflict check, insert, and
    /// persist all happen under one write lock, so two concurrent creates
    /// for the same id cannot both succeed. A failed persist rolls the
    /// insert back.
    ///
    /// Returns the `(id, url)` pair that was stored.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] when `url` is empty
    /// - [`AppError::Conflict`] when the explicit id is already taken
    /// - [`AppError::Internal`] when id generation keeps colliding
    /// - [`AppError::Io`] when the table cannot be written back
    pub async fn create(
        &self,
        id: Option<String>,
        url: String,
    ) -> Result<(String, String), AppError> {
        if url.is_empty() {
            return Err(AppError::bad_request(
                "url required",
                json!({ "field": "url" }),
            ));
        }

        let mut table = self.table.write().await;

        let id = match id {
            Some(id) => {
                if table.contains_key(&id) {
                    return Err(AppError::conflict(
                        "id already exists",
                        json!({ "id": id }),
                    ));
                }
                id
            }
            None => {
                let mut generated = None;

                for attempt in 1..=MAX_GENERATE_ATTEMPTS {
                    let candidate = self.id_generator.generate();
                    if !table.contains_key(&candidate) {
                        generated = Some(candidate);
                        break;
                    }
                    tracing::warn!(attempt, "id collision, retrying");
                }

                generated.ok_or_else(|| {
                    AppError::internal(
                        "Failed to generate unique id",
                        json!({ "attempts": MAX_GENERATE_ATTEMPTS }),
                    )
                })?
            }
        };

        table.insert(id.clone(), url.clone());

        if let Err(e) = persist(&self.path, &table) {
            table.remove(&id);
            return Err(e);
        }

        Ok((id, url))
    }
}

/// Writes the table to disk as a pretty-printed JSON object with sorted keys.
fn persist(path: &Path, table: &HashMap<String, String>) -> Result<(), AppError> {
    let snapshot: BTreeMap<&String, &String> = table.iter().collect();

    let json = serde_json::to_string_pretty(&snapshot).map_err(|e| {
        AppError::internal(
            "Failed to serialize redirect table",
            json!({ "cause": e.to_string() }),
        )
    })?;

    fs::write(path, json).map_err(|e| {
        AppError::io(
            "Failed to write redirect table",
            json!({ "path": path.display().to_string(), "cause": e.to_string() }),
        )
    })
}
