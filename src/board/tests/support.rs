//! Shared fixtures for board unit tests.

use crate::board::domain::{Item, ItemId, Priority, Project, ProjectStatus};
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::{PoisonError, RwLock};

/// Clock frozen at a chosen instant until advanced.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.now.write().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0)
        .single()
        .expect("valid reference time")
}

pub fn item_id(value: &str) -> ItemId {
    ItemId::new(value).expect("valid item id")
}

pub fn project(id: &str, status: ProjectStatus) -> Project {
    Item::new(item_id(id), status)
}

pub fn yesterday() -> DateTime<Utc> {
    reference_now() - TimeDelta::days(1)
}

pub fn tomorrow() -> DateTime<Utc> {
    reference_now() + TimeDelta::days(1)
}

/// The starting board of the documented scenarios: an overdue high
/// priority `P1` and an upcoming low priority `P2`, both active.
pub fn scenario_projects() -> Vec<Project> {
    vec![
        project("P2", ProjectStatus::Active)
            .with_priority(Priority::Low)
            .with_due_at(tomorrow()),
        project("P1", ProjectStatus::Active)
            .with_priority(Priority::High)
            .with_due_at(yesterday()),
    ]
}
