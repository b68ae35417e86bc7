use async_trait::async_trait;

use crate::Result;

/// Core trait for view store implementations.
///
/// A view store persists one counter per slug. Rows are provisioned
/// out-of-band (seed/admin step); none of these operations creates or
/// deletes a row. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait ViewStore: Send + Sync {
    /// Returns the sum of all counters.
    ///
    /// An empty table reports `0`, never an error.
    async fn total_count(&self) -> Result<i64>;

    /// Returns the counter for `slug`, or `0` when no row matches.
    async fn count_for_slug(&self, slug: &str) -> Result<i64>;

    /// Atomically adds 1 to the counter for `slug` and returns the
    /// post-increment value in the same round trip.
    ///
    /// This is the sole mutator of `count` and must be a single atomic
    /// statement at the store level. A read-then-write from the application
    /// would lose updates under concurrent increments of the same slug.
    /// When no row matches, zero rows are updated and the reported count
    /// is `0` (not an error).
    async fn increment(&self, slug: &str) -> Result<i64>;
}
