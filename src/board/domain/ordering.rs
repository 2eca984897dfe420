//! Ordering policy applied inside every bucket.
//!
//! Overdue items come first regardless of priority. Within the overdue and
//! the non-overdue partitions, higher priority comes first and a missing
//! priority ranks lowest. Sorting is stable, so exact ties keep their input
//! order.

use super::{Item, Priority};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;

/// Sort key of one item at a given instant. Smaller keys sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrderingKey {
    overdue: Reverse<bool>,
    rank: Reverse<u8>,
}

impl OrderingKey {
    /// Returns whether the keyed item was overdue.
    #[must_use]
    pub const fn is_overdue(self) -> bool {
        self.overdue.0
    }

    /// Returns the keyed item's priority rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank.0
    }
}

/// Computes the ordering key of `item` at `now`.
#[must_use]
pub fn ordering_key<S: Copy>(item: &Item<S>, now: DateTime<Utc>) -> OrderingKey {
    OrderingKey {
        overdue: Reverse(item.is_overdue(now)),
        rank: Reverse(Priority::rank_of(item.priority())),
    }
}

/// Sorts one bucket in place by the ordering policy.
pub fn sort_bucket<S: Copy>(items: &mut [Item<S>], now: DateTime<Utc>) {
    items.sort_by_key(|item| ordering_key(item, now));
}

/// Returns whether `items` already satisfy the ordering policy at `now`.
#[must_use]
pub fn is_policy_ordered<S: Copy>(items: &[Item<S>], now: DateTime<Utc>) -> bool {
    items.windows(2).all(|pair| match pair {
        [first, second] => ordering_key(first, now) <= ordering_key(second, now),
        _ => true,
    })
}

/// Index at which `item` joins `items`: after every item that sorts before
/// or level with it.
pub(crate) fn policy_position<S: Copy>(
    items: &[Item<S>],
    item: &Item<S>,
    now: DateTime<Utc>,
) -> usize {
    let key = ordering_key(item, now);
    items.partition_point(|other| ordering_key(other, now) <= key)
}
