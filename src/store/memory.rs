use async_trait::async_trait;
use dashmap::DashMap;

use super::{Collection, Document, Mutation, StoreError};

// ============================================================================
// In-Memory Collection
// ============================================================================
//
// DashMap-backed implementation of the document store port. Entry access
// holds the shard lock for that key, which is what makes `update_with` a
// single atomic read-modify-write: concurrent mutations of the same document
// serialize, and a rejected mutation leaves the stored value untouched
// because the closure runs against a scratch copy.
//
// ============================================================================

pub struct MemoryCollection<T: Document> {
    name: &'static str,
    documents: DashMap<String, T>,
}

impl<T: Document> MemoryCollection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            documents: DashMap::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

#[async_trait]
impl<T: Document> Collection<T> for MemoryCollection<T> {
    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        let mut docs: Vec<T> = self
            .documents
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        // DashMap iteration order is arbitrary; keep listings deterministic.
        docs.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(docs)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self.documents.get(id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, doc: T) -> Result<(), StoreError> {
        let id = doc.id().to_string();
        match self.documents.entry(id.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(StoreError::DuplicateId(id))
            }
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(doc);
                tracing::debug!(collection = self.name, id = %id, "document inserted");
                Ok(())
            }
        }
    }

    async fn update_with(&self, id: &str, mutate: Mutation<T>) -> Result<T, StoreError> {
        let mut entry = self
            .documents
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        // Mutate a scratch copy so a rejected update cannot leave the stored
        // document partially modified.
        let mut draft = entry.value().clone();
        mutate(&mut draft)?;
        *entry.value_mut() = draft.clone();

        tracing::debug!(collection = self.name, id = %id, "document updated");
        Ok(draft)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let removed = self.documents.remove(id).is_some();
        if removed {
            tracing::debug!(collection = self.name, id = %id, "document deleted");
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.documents.len())
    }
}
