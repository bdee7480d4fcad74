use chrono::NaiveDate;
use proptest::prelude::*;
use tempfile::tempdir;

use nutripekes::models::{
    completion_bucket, portions_for_age, CompletionBucket, DailyProgressRecord, FoodGroupId,
};
use nutripekes::state::{DailyProgressTracker, FixedClock, JsonFileStore, MemoryStore};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
}

fn open(age: u32, clock: &FixedClock) -> DailyProgressTracker<MemoryStore, FixedClock> {
    let record = DailyProgressRecord {
        child_age: age,
        ..Default::default()
    };
    DailyProgressTracker::open(MemoryStore::new(record), clock.clone()).unwrap()
}

#[test]
fn test_age_five_produce_scenario() {
    let clock = FixedClock::new(day(1));
    let mut tracker = open(5, &clock);

    let targets: Vec<u32> = tracker.groups().iter().map(|g| g.target_points()).collect();
    assert_eq!(targets, vec![3, 2, 1, 4, 5]);

    for _ in 0..3 {
        assert!(tracker.consume(FoodGroupId::Verduras).unwrap());
    }
    assert_eq!(tracker.group(FoodGroupId::Verduras).remaining_points(), 0);

    assert!(!tracker.consume(FoodGroupId::Verduras).unwrap());
    assert_eq!(tracker.group(FoodGroupId::Verduras).remaining_points(), 0);
}

#[test]
fn test_same_day_reload_preserves_counters() {
    let clock = FixedClock::new(day(1));
    let mut tracker = open(7, &clock);
    tracker.consume(FoodGroupId::Agua).unwrap();
    tracker.consume(FoodGroupId::Animal).unwrap();

    let before = tracker.snapshot();
    assert!(!tracker.reload_data(7, false).unwrap());
    assert!(!tracker.reload_data(7, false).unwrap());
    assert_eq!(tracker.snapshot().groups, before.groups);
}

#[test]
fn test_new_day_resets_even_without_force() {
    let clock = FixedClock::new(day(1));
    let mut tracker = open(9, &clock);
    tracker.consume(FoodGroupId::Cereales).unwrap();
    tracker.consume(FoodGroupId::Cereales).unwrap();

    clock.advance_days(1);
    assert!(tracker.reload_data(9, false).unwrap());
    assert_eq!(tracker.group(FoodGroupId::Cereales).remaining_points(), 6);
    assert_eq!(tracker.last_saved_date(), "2025-09-02");
}

#[test]
fn test_same_day_record_with_one_missing_counter_resets() {
    let clock = FixedClock::new(day(1));
    let record = DailyProgressRecord {
        child_age: 5,
        last_saved_date: "2025-09-01".to_string(),
        verduras: 1,
        animal: 0,
        leguminosas: 1,
        cereales: -1,
        agua: 2,
    };
    let mut tracker = DailyProgressTracker::open(MemoryStore::new(record), clock).unwrap();

    let remaining: Vec<u32> = tracker.groups().iter().map(|g| g.remaining_points()).collect();
    assert_eq!(remaining, vec![3, 2, 1, 4, 5]);
    assert!(tracker.store().record().has_saved_progress());

    // Once every counter is written, the same day carries over again
    tracker.consume(FoodGroupId::Agua).unwrap();
    assert!(!tracker.reload_data(5, false).unwrap());
    assert_eq!(tracker.group(FoodGroupId::Agua).remaining_points(), 4);
}

#[test]
fn test_force_reset_same_day() {
    let clock = FixedClock::new(day(1));
    let mut tracker = open(4, &clock);
    tracker.consume(FoodGroupId::Leguminosas).unwrap();

    assert!(tracker.reload_data(4, true).unwrap());
    assert_eq!(tracker.group(FoodGroupId::Leguminosas).remaining_points(), 1);
}

#[test]
fn test_progress_survives_restart_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    let clock = FixedClock::new(day(3));

    {
        let mut tracker = DailyProgressTracker::open(JsonFileStore::new(&path), clock.clone()).unwrap();
        tracker.set_age(6).unwrap();
        tracker.consume(FoodGroupId::Agua).unwrap();
        tracker.consume(FoodGroupId::Agua).unwrap();
    }

    let tracker = DailyProgressTracker::open(JsonFileStore::new(&path), clock.clone()).unwrap();
    assert_eq!(tracker.age(), 6);
    assert_eq!(tracker.group(FoodGroupId::Agua).remaining_points(), 4);
    assert_eq!(tracker.group(FoodGroupId::Verduras).remaining_points(), 4);

    clock.advance_days(1);
    let tracker = DailyProgressTracker::open(JsonFileStore::new(&path), clock).unwrap();
    assert_eq!(tracker.group(FoodGroupId::Agua).remaining_points(), 6);
}

#[test]
fn test_bucket_reaches_complete_only_at_zero() {
    let clock = FixedClock::new(day(1));
    let mut tracker = open(3, &clock);
    assert_eq!(tracker.completion_bucket(), CompletionBucket::Empty);

    let mut last = tracker.completion_bucket();
    for id in FoodGroupId::ALL {
        while tracker.consume(id).unwrap() {
            let bucket = tracker.completion_bucket();
            assert!(bucket >= last);
            if tracker.total_remaining() > 0 {
                assert_ne!(bucket, CompletionBucket::Complete);
            }
            last = bucket;
        }
    }
    assert_eq!(tracker.completion_bucket(), CompletionBucket::Complete);
}

fn any_group() -> impl Strategy<Value = FoodGroupId> {
    prop::sample::select(FoodGroupId::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_portions_follow_age_bands(age in 0u32..200) {
        let expected = match age {
            3..=5 => [3, 2, 1, 4, 5],
            6..=8 => [4, 2, 2, 5, 6],
            _ => [5, 3, 2, 6, 8],
        };
        prop_assert_eq!(portions_for_age(age).as_array(), expected);
    }

    #[test]
    fn prop_counters_stay_in_range(
        age in 0u32..12,
        ops in prop::collection::vec((any::<bool>(), any_group()), 0..80),
    ) {
        let clock = FixedClock::new(day(1));
        let mut tracker = open(age, &clock);
        for (eat, id) in ops {
            if eat {
                tracker.consume(id).unwrap();
            } else {
                tracker.restore(id).unwrap();
            }
            for group in tracker.groups() {
                prop_assert!(group.remaining_points() <= group.target_points());
            }
        }
    }

    #[test]
    fn prop_consume_then_restore_roundtrips(
        id in any_group(),
        eaten in 0u32..8,
    ) {
        let clock = FixedClock::new(day(1));
        let mut tracker = open(10, &clock);
        for _ in 0..eaten {
            tracker.consume(id).unwrap();
        }
        let before = tracker.group(id).remaining_points();
        if tracker.consume(id).unwrap() {
            prop_assert!(tracker.restore(id).unwrap());
            prop_assert_eq!(tracker.group(id).remaining_points(), before);
        } else {
            prop_assert_eq!(before, 0);
        }
    }

    #[test]
    fn prop_bucket_monotone_in_remaining(target in 1u32..60, a in 0u32..60, b in 0u32..60) {
        let (hi, lo) = (a.max(b).min(target), a.min(b).min(target));
        prop_assert!(completion_bucket(target, lo) >= completion_bucket(target, hi));
        prop_assert_eq!(completion_bucket(target, lo) == CompletionBucket::Complete, lo == 0);
    }
}
