// Private module declaration
mod memory;

use async_trait::async_trait;

// Re-export for public API
pub use memory::MemoryCollection;

// ============================================================================
// Document Store Port
// ============================================================================
//
// The boundary to the system of record: a document store exposing
// find/insert/update/delete-by-id semantics. The application only ever talks
// to this trait; the bundled implementation is an in-memory collection.
//
// `update_with` is the single write primitive for mutations: the closure runs
// against the stored document under that document's lock, so check-and-modify
// sequences (status transitions, rating recomputes, stock decrements) are
// atomic per document and no intermediate state is observable.
//
// ============================================================================

/// A record that can live in a [`Collection`].
pub trait Document: Clone + Send + Sync + 'static {
    /// Stable identifier, unique within the collection.
    fn id(&self) -> &str;
}

/// Atomic read-modify-write closure. Returning an error leaves the stored
/// document untouched.
pub type Mutation<T> = Box<dyn FnOnce(&mut T) -> Result<(), StoreError> + Send>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("duplicate document id: {0}")]
    DuplicateId(String),

    #[error("update rejected: {0}")]
    Conflict(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait Collection<T: Document>: Send + Sync {
    /// All documents in the collection.
    async fn find_all(&self) -> Result<Vec<T>, StoreError>;

    /// Single document by id, `None` when absent.
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError>;

    /// Insert a new document. Fails on duplicate id.
    async fn insert(&self, doc: T) -> Result<(), StoreError>;

    /// Apply `mutate` to the stored document as one atomic operation and
    /// return the updated document.
    async fn update_with(&self, id: &str, mutate: Mutation<T>) -> Result<T, StoreError>;

    /// Remove a document. Returns whether it existed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Number of documents currently stored.
    async fn count(&self) -> Result<usize, StoreError>;
}
