use tracing::{debug, info};

use crate::error::{NutriError, Result};
use crate::models::{
    completion_bucket, portions_for_age, CompletionBucket, DailyProgressRecord, FoodGroup,
    FoodGroupId, MAX_AGE, MIN_AGE,
};
use crate::state::clock::{format_date, Clock, SystemClock};
use crate::state::persistence::ProgressStore;

/// Read-only view of today's progress handed to observers and renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub age: u32,
    pub date: String,
    pub groups: Vec<FoodGroup>,
    pub bucket: CompletionBucket,
}

impl ProgressSnapshot {
    pub fn total_target(&self) -> u32 {
        self.groups.iter().map(|g| g.target_points()).sum()
    }

    pub fn total_remaining(&self) -> u32 {
        self.groups.iter().map(|g| g.remaining_points()).sum()
    }
}

type Observer = Box<dyn FnMut(&ProgressSnapshot)>;

/// Owns today's per-group counters and the daily reset policy.
///
/// Every successful change is written through to the store as a full
/// record and then broadcast to subscribers.
pub struct DailyProgressTracker<S: ProgressStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    record: DailyProgressRecord,
    groups: Vec<FoodGroup>,
    observers: Vec<Observer>,
}

impl<S: ProgressStore, C: Clock> DailyProgressTracker<S, C> {
    /// Open the tracker and load progress for the stored age.
    pub fn open(store: S, clock: C) -> Result<Self> {
        let record = store.load()?;
        let age = record.child_age;
        let mut tracker = Self {
            store,
            clock,
            record,
            groups: Vec::new(),
            observers: Vec::new(),
        };
        tracker.reload_data(age, false)?;
        Ok(tracker)
    }

    /// Rebuild all five groups for `age`.
    ///
    /// Progress is reset to the age's targets on a new calendar day, when
    /// `force_reset` is set, or when nothing was ever saved; otherwise the
    /// stored counters carry over. Returns whether a reset happened.
    pub fn reload_data(&mut self, age: u32, force_reset: bool) -> Result<bool> {
        debug!(age, force_reset, "reloading daily progress");

        let targets = portions_for_age(age);
        let today = format_date(self.clock.today());
        let mut record = self.store.load()?;

        let is_new_day = record.last_saved_date != today;
        let should_reset = is_new_day || force_reset || !record.has_saved_progress();

        let groups: Vec<FoodGroup> = FoodGroupId::ALL
            .into_iter()
            .map(|id| {
                let target = targets.get(id);
                let remaining = if should_reset {
                    target
                } else {
                    record.counter(id).max(0) as u32
                };
                FoodGroup::new(id, target, remaining)
            })
            .collect();

        let age_changed = record.child_age != age;
        record.child_age = age;

        if should_reset {
            info!(date = %today, age, is_new_day, force_reset, "daily progress reset");
            record.last_saved_date = today;
            self.commit(groups, record)?;
        } else if age_changed {
            self.commit(groups, record)?;
        } else {
            self.groups = groups;
            self.record = record;
            self.notify();
        }

        Ok(should_reset)
    }

    /// Store a new age and restart today's progress with its targets.
    pub fn set_age(&mut self, age: u32) -> Result<()> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(NutriError::InvalidAge(age));
        }
        self.reload_data(age, true)?;
        Ok(())
    }

    /// Mark one portion of `id` eaten. `Ok(false)` when already at zero.
    pub fn consume(&mut self, id: FoodGroupId) -> Result<bool> {
        let mut groups = self.groups.clone();
        if !groups[id.index()].consume() {
            return Ok(false);
        }
        debug!(group = %id, remaining = groups[id.index()].remaining_points(), "portion consumed");
        self.commit(groups, self.record.clone())?;
        Ok(true)
    }

    /// Give back one portion of `id`. `Ok(false)` when already at the target.
    pub fn restore(&mut self, id: FoodGroupId) -> Result<bool> {
        let mut groups = self.groups.clone();
        if !groups[id.index()].restore() {
            return Ok(false);
        }
        debug!(group = %id, remaining = groups[id.index()].remaining_points(), "portion restored");
        self.commit(groups, self.record.clone())?;
        Ok(true)
    }

    /// Register a callback run after every state change.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&ProgressSnapshot) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn groups(&self) -> &[FoodGroup] {
        &self.groups
    }

    pub fn group(&self, id: FoodGroupId) -> &FoodGroup {
        &self.groups[id.index()]
    }

    /// Age the current targets were computed for.
    pub fn age(&self) -> u32 {
        self.record.child_age
    }

    /// Date of the last reset (`YYYY-MM-DD`).
    pub fn last_saved_date(&self) -> &str {
        &self.record.last_saved_date
    }

    pub fn total_target(&self) -> u32 {
        self.groups.iter().map(|g| g.target_points()).sum()
    }

    pub fn total_remaining(&self) -> u32 {
        self.groups.iter().map(|g| g.remaining_points()).sum()
    }

    pub fn completion_bucket(&self) -> CompletionBucket {
        completion_bucket(self.total_target(), self.total_remaining())
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            age: self.age(),
            date: self.record.last_saved_date.clone(),
            groups: self.groups.clone(),
            bucket: self.completion_bucket(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write all five counters, never just the changed one.
    ///
    /// In-memory state only changes once the store accepted the write.
    fn commit(&mut self, groups: Vec<FoodGroup>, mut record: DailyProgressRecord) -> Result<()> {
        for group in &groups {
            record.set_counter(group.id, group.remaining_points() as i32);
        }
        self.store.save(&record)?;
        self.groups = groups;
        self.record = record;
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }
}
