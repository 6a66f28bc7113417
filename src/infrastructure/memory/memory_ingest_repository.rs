//! In-memory implementation of the ingest history.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{IngestRecord, NewIngest};
use crate::domain::repositories::IngestRepository;

/// Default number of batches kept in memory.
pub const DEFAULT_CAPACITY: usize = 50;

/// Process-local, capacity-bounded history of ingest batches.
///
/// Records are kept newest first. Prepending and evicting happen under a
/// single write guard, so readers observe either the state before an insert
/// or the state after it.
pub struct InMemoryIngestRepository {
    records: RwLock<VecDeque<IngestRecord>>,
    capacity: usize,
}

impl InMemoryIngestRepository {
    /// Creates an empty history holding at most `capacity` records.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: RwLock::new(VecDeque::with_capacity(capacity + 1)),
            capacity,
        }
    }
}

impl Default for InMemoryIngestRepository {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl IngestRepository for InMemoryIngestRepository {
    async fn insert(&self, new: NewIngest) -> IngestRecord {
        let record = IngestRecord::from_new(new, Utc::now());

        let mut records = self.records.write().await;
        records.push_front(record.clone());

        if records.len() > self.capacity {
            let evicted = records.len() - self.capacity;
            records.truncate(self.capacity);
            debug!(evicted, capacity = self.capacity, "Evicted oldest ingests");
            metrics::counter!("ingest_evicted_total").increment(evicted as u64);
        }

        record
    }

    async fn latest(&self) -> Option<IngestRecord> {
        self.records.read().await.front().cloned()
    }

    async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    async fn snapshot(&self, limit: Option<usize>) -> (Vec<IngestRecord>, usize) {
        let records = self.records.read().await;
        let take = limit.unwrap_or(records.len());
        let items = records.iter().take(take).cloned().collect();
        (items, records.len())
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Item;
    use std::sync::Arc;

    fn batch(page: &str, items: usize) -> NewIngest {
        NewIngest {
            source: "api".to_string(),
            page: page.to_string(),
            platform: "x".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            items: (0..items)
                .map(|i| Item::new("x", None, format!("https://x.com/{page}/{i}"), None))
                .collect(),
            client: None,
        }
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = InMemoryIngestRepository::new(3);

        assert!(repo.latest().await.is_none());
        assert!(repo.snapshot(None).await.0.is_empty());
        assert_eq!(repo.count().await, 0);
        assert_eq!(repo.capacity(), 3);
    }

    #[tokio::test]
    async fn test_insert_then_latest_returns_same_content() {
        let repo = InMemoryIngestRepository::default();
        let new = batch("p1", 2);

        let stored = repo.insert(new.clone()).await;
        let latest = repo.latest().await.unwrap();

        assert_eq!(latest, stored);
        assert_eq!(latest.page, new.page);
        assert_eq!(latest.items, new.items);
        assert_eq!(latest.source, new.source);
        assert_eq!(latest.count(), 2);
    }

    #[tokio::test]
    async fn test_snapshot_is_newest_first() {
        let repo = InMemoryIngestRepository::new(10);
        for page in ["a", "b", "c"] {
            repo.insert(batch(page, 1)).await;
        }

        let pages: Vec<String> = repo
            .snapshot(None)
            .await
            .0
            .into_iter()
            .map(|r| r.page)
            .collect();
        assert_eq!(pages, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest() {
        let repo = InMemoryIngestRepository::new(3);
        for i in 0..7 {
            repo.insert(batch(&format!("p{i}"), i)).await;
        }

        assert_eq!(repo.count().await, 3);

        let records = repo.snapshot(None).await.0;
        let pages: Vec<&str> = records.iter().map(|r| r.page.as_str()).collect();
        assert_eq!(pages, vec!["p6", "p5", "p4"]);

        for record in &records {
            assert_eq!(record.count(), record.items.len());
        }
    }

    #[tokio::test]
    async fn test_snapshot_respects_limit() {
        let repo = InMemoryIngestRepository::new(10);
        for i in 0..5 {
            repo.insert(batch(&format!("p{i}"), 0)).await;
        }

        let records = repo.snapshot(Some(2)).await.0;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].page, "p4");

        assert_eq!(repo.snapshot(Some(100)).await.0.len(), 5);
        assert!(repo.snapshot(Some(0)).await.0.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_count_matches_items() {
        let repo = Arc::new(InMemoryIngestRepository::new(4));

        let writer = {
            let repo = repo.clone();
            tokio::spawn(async move {
                for i in 0..64 {
                    repo.insert(batch(&format!("p{i}"), 1)).await;
                }
            })
        };

        for _ in 0..64 {
            let (items, count) = repo.snapshot(None).await;
            assert_eq!(items.len(), count);
            tokio::task::yield_now().await;
        }

        writer.await.unwrap();

        let (items, count) = repo.snapshot(Some(2)).await;
        assert_eq!(items.len(), 2);
        assert_eq!(count, 4);
        assert_eq!(items[0].page, "p63");
    }

    #[tokio::test]
    async fn test_returned_records_are_copies() {
        let repo = InMemoryIngestRepository::new(5);
        repo.insert(batch("original", 1)).await;

        let mut copy = repo.latest().await.unwrap();
        copy.page = "changed".to_string();
        copy.items.clear();

        let stored = repo.latest().await.unwrap();
        assert_eq!(stored.page, "original");
        assert_eq!(stored.count(), 1);
    }

    #[tokio::test]
    async fn test_zero_capacity_is_raised_to_one() {
        let repo = InMemoryIngestRepository::new(0);
        repo.insert(batch("a", 0)).await;
        repo.insert(batch("b", 0)).await;

        assert_eq!(repo.capacity(), 1);
        assert_eq!(repo.count().await, 1);
        assert_eq!(repo.latest().await.unwrap().page, "b");
    }

    #[tokio::test]
    async fn test_concurrent_inserts_stay_bounded() {
        let repo = Arc::new(InMemoryIngestRepository::new(8));

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert(batch(&format!("p{i}"), 1)).await;
                    assert!(repo.count().await <= 8);
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.count().await, 8);
    }
}
