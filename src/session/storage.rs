use dashmap::DashMap;

// ============================================================================
// Session Storage Port
// ============================================================================
//
// The client-side persistent key-value store the session survives in between
// visits. Values are opaque string blobs keyed by string; the session layer
// owns the encoding.
//
// ============================================================================

pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn clear(&self, key: &str);
}

/// In-memory storage, used by tests and by deployments with no persistent
/// client store.
#[derive(Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn clear(&self, key: &str) {
        self.entries.remove(key);
    }
}
