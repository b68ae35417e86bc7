use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Result, store::ViewStore};

/// In-memory view store implementation for testing.
///
/// Stores all counters in memory and provides the same interface as the
/// SQLite implementation.
#[derive(Clone, Default)]
pub struct InMemoryViewStore {
    counts: Arc<RwLock<HashMap<String, i64>>>,
}

impl InMemoryViewStore {
    /// Creates a new empty in-memory view store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provisions a row for `slug`, standing in for the out-of-band seed
    /// step that creates rows before their first increment.
    pub async fn insert_slug(&self, slug: &str, count: i64) {
        self.counts.write().await.insert(slug.to_string(), count);
    }

    /// Returns the number of provisioned slugs.
    pub async fn slug_count(&self) -> usize {
        self.counts.read().await.len()
    }
}

#[async_trait]
impl ViewStore for InMemoryViewStore {
    async fn total_count(&self) -> Result<i64> {
        let counts = self.counts.read().await;
        Ok(counts.values().sum())
    }

    async fn count_for_slug(&self, slug: &str) -> Result<i64> {
        let counts = self.counts.read().await;
        Ok(counts.get(slug).copied().unwrap_or(0))
    }

    async fn increment(&self, slug: &str) -> Result<i64> {
        let mut counts = self.counts.write().await;
        // Unknown slugs are not provisioned on write; report 0 like the
        // zero-row UPDATE does.
        match counts.get_mut(slug) {
            Some(count) => {
                *count += 1;
                Ok(*count)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_totals_zero() {
        let store = InMemoryViewStore::new();
        assert_eq!(store.total_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn total_sums_all_slugs() {
        let store = InMemoryViewStore::new();
        store.insert_slug("home", 2).await;
        store.insert_slug("about", 3).await;
        assert_eq!(store.total_count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn unknown_slug_reads_zero() {
        let store = InMemoryViewStore::new();
        assert_eq!(store.count_for_slug("missing").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn increment_returns_new_value() {
        let store = InMemoryViewStore::new();
        store.insert_slug("home", 5).await;
        assert_eq!(store.increment("home").await.unwrap(), 6);
        assert_eq!(store.count_for_slug("home").await.unwrap(), 6);
    }

    #[tokio::test]
    async fn increment_unknown_slug_does_not_provision() {
        let store = InMemoryViewStore::new();
        assert_eq!(store.increment("missing").await.unwrap(), 0);
        assert_eq!(store.slug_count().await, 0);
    }
}
