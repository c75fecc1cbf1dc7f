//! Documentation lookup boundary.
//!
//! Documentation bodies live with an external persistence collaborator
//! (compressed sidecar files, language-service caches). A symbol space only
//! holds an optional provider handle; when it is absent, displayed
//! documentation degrades and nothing else does.

/// Supplies raw documentation text by doc key.
///
/// Class keys are qualified names (`core.String`); member keys append the
/// member name (`core.String#char_at`).
pub trait DocProvider: Send + Sync {
    fn documentation(&self, key: &str) -> Option<String>;
}

/// In-memory provider, mainly for tests and small source sessions.
#[derive(Default)]
pub struct StaticDocs {
    entries: rustc_hash::FxHashMap<String, String>,
}

impl StaticDocs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }
}

impl DocProvider for StaticDocs {
    fn documentation(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
