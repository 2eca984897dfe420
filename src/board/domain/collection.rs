//! Bucketed view of a board's items.

use super::ordering::{policy_position, sort_bucket};
use super::{BucketKey, Item, ItemId};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

/// Items of one board, partitioned into every bucket `S` defines.
///
/// Every bucket in [`BucketKey::ALL`] is present, possibly empty, and each
/// item identifier appears in exactly one bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<S: BucketKey> {
    buckets: BTreeMap<S, Vec<Item<S>>>,
}

/// Header data for one board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketSummary<S> {
    /// Bucket status.
    pub status: S,
    /// Column title.
    pub label: &'static str,
    /// Number of items in the bucket.
    pub count: usize,
    /// Number of overdue items in the bucket.
    pub overdue: usize,
}

impl<S: BucketKey> Default for Collection<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: BucketKey> Collection<S> {
    /// Creates a collection with every bucket present and empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            buckets: S::ALL.iter().map(|status| (*status, Vec::new())).collect(),
        }
    }

    /// Groups a flat item list into buckets and orders each bucket.
    ///
    /// Items whose identifier was already seen are dropped so that the
    /// partition stays duplicate-free.
    #[must_use]
    pub fn group(items: impl IntoIterator<Item = Item<S>>, now: DateTime<Utc>) -> Self {
        let mut collection = Self::empty();
        let mut seen = HashSet::new();
        for item in items {
            if !seen.insert(item.id().clone()) {
                warn!(item_id = %item.id(), "dropping duplicate item while grouping board");
                continue;
            }
            collection.bucket_mut(item.status()).push(item);
        }
        collection.resort(now);
        collection
    }

    /// Returns the ordered items of one bucket.
    #[must_use]
    pub fn bucket(&self, status: S) -> &[Item<S>] {
        self.buckets
            .get(&status)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the identifiers of one bucket, in order.
    #[must_use]
    pub fn bucket_ids(&self, status: S) -> Vec<&str> {
        self.bucket(status)
            .iter()
            .map(|item| item.id().as_str())
            .collect()
    }

    /// Iterates buckets in column order.
    pub fn buckets(&self) -> impl Iterator<Item = (S, &[Item<S>])> {
        self.buckets
            .iter()
            .map(|(status, items)| (*status, items.as_slice()))
    }

    /// Iterates all items, bucket by bucket.
    pub fn items(&self) -> impl Iterator<Item = &Item<S>> {
        self.buckets.values().flatten()
    }

    /// Returns the total number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Returns whether every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }

    /// Finds the bucket and index holding `id`.
    #[must_use]
    pub fn locate(&self, id: &ItemId) -> Option<(S, usize)> {
        self.buckets.iter().find_map(|(status, items)| {
            items
                .iter()
                .position(|item| item.id() == id)
                .map(|index| (*status, index))
        })
    }

    /// Returns the item with the given identifier.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item<S>> {
        self.items().find(|item| item.id() == id)
    }

    /// Returns per-column header data in column order.
    #[must_use]
    pub fn summaries(&self, now: DateTime<Utc>) -> Vec<BucketSummary<S>> {
        self.buckets
            .iter()
            .map(|(status, items)| BucketSummary {
                status: *status,
                label: status.label(),
                count: items.len(),
                overdue: items.iter().filter(|item| item.is_overdue(now)).count(),
            })
            .collect()
    }

    /// Restores policy order in every bucket at `now`.
    ///
    /// Overdue status depends on the clock, so an ordered bucket can fall
    /// out of order as due dates pass. The sort is stable: buckets that are
    /// still ordered keep their exact sequence.
    pub(crate) fn resort(&mut self, now: DateTime<Utc>) {
        for bucket in self.buckets.values_mut() {
            sort_bucket(bucket, now);
        }
    }

    /// Removes `id` from `status`, returning its former index and the item.
    pub(crate) fn remove(&mut self, status: S, id: &ItemId) -> Option<(usize, Item<S>)> {
        let bucket = self.buckets.get_mut(&status)?;
        let index = bucket.iter().position(|item| item.id() == id)?;
        Some((index, bucket.remove(index)))
    }

    /// Removes `id` from whichever bucket holds it.
    pub(crate) fn take(&mut self, id: &ItemId) -> Option<Item<S>> {
        let (status, _) = self.locate(id)?;
        self.remove(status, id).map(|(_, item)| item)
    }

    /// Inserts `item` into its status bucket at its policy position.
    ///
    /// The bucket must already be ordered at `now`; see [`Self::resort`].
    pub(crate) fn insert_sorted(&mut self, item: Item<S>, now: DateTime<Utc>) {
        let bucket = self.bucket_mut(item.status());
        let index = policy_position(bucket, &item, now);
        bucket.insert(index, item);
    }

    /// Inserts `item` near `index_hint`, then restores policy order.
    ///
    /// When the bucket has not changed since the item left index
    /// `index_hint`, this restores the exact previous order.
    pub(crate) fn insert_near(&mut self, item: Item<S>, index_hint: usize, now: DateTime<Utc>) {
        let bucket = self.bucket_mut(item.status());
        let index = index_hint.min(bucket.len());
        bucket.insert(index, item);
        sort_bucket(bucket, now);
    }

    fn bucket_mut(&mut self, status: S) -> &mut Vec<Item<S>> {
        self.buckets.entry(status).or_default()
    }
}
