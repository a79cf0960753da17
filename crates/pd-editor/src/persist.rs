//! Persistence boundary.
//!
//! The core never talks to browser storage directly; a `DocumentStore`
//! implementation owns the actual backend (localStorage in the browser,
//! memory in tests). Payloads are the serialized root sequence as one JSON
//! string, stored under a fixed namespace key. A failed or unreadable read
//! is treated identically to "no saved state".

use crate::session::EditorSession;
use pd_core::serialize;

/// Namespace key the saved document lives under.
pub const STORAGE_KEY: &str = "playground";

/// Storage backend contract for saved documents.
pub trait DocumentStore {
    fn save(&mut self, payload: &str);
    fn load(&self) -> Option<String>;
    fn clear(&mut self);
}

/// In-memory store for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn save(&mut self, payload: &str) {
        self.payload = Some(payload.to_string());
    }

    fn load(&self) -> Option<String> {
        self.payload.clone()
    }

    fn clear(&mut self) {
        self.payload = None;
    }
}

/// Startup path: a session over whatever the store holds. Unreadable
/// payloads and individual foreign components degrade to warnings, never
/// to a failed start.
pub fn load_session(store: &dyn DocumentStore) -> EditorSession {
    match store.load() {
        Some(payload) => match serialize::parse_payload(&payload) {
            Ok((roots, errors)) => {
                if !errors.is_empty() {
                    log::warn!("loaded document with {} unreadable component(s)", errors.len());
                }
                EditorSession::with_document(roots)
            }
            Err(err) => {
                log::warn!("discarding unreadable saved document: {err}");
                EditorSession::new()
            }
        },
        None => EditorSession::new(),
    }
}

/// Write the session's current document through the store.
pub fn save_session(store: &mut dyn DocumentStore, session: &EditorSession) {
    store.save(&session.save_payload());
}
