use serde::{Deserialize, Serialize};

use crate::models::food_group::FoodGroupId;

/// Counter value meaning "no progress saved yet".
pub const NO_PROGRESS_SENTINEL: i32 = -1;

fn sentinel() -> i32 {
    NO_PROGRESS_SENTINEL
}

/// Persisted daily progress: five counters, the last reset date and the
/// child's age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProgressRecord {
    /// Child's age in years. 0 means not configured yet.
    #[serde(rename = "childAge", default)]
    pub child_age: u32,

    /// Calendar date (`YYYY-MM-DD`) of the last reset, empty if never.
    #[serde(rename = "lastSavedDate", default)]
    pub last_saved_date: String,

    #[serde(rename = "progressVerduras", default = "sentinel")]
    pub verduras: i32,

    #[serde(rename = "progressAnimal", default = "sentinel")]
    pub animal: i32,

    #[serde(rename = "progressLeguminosas", default = "sentinel")]
    pub leguminosas: i32,

    #[serde(rename = "progressCereales", default = "sentinel")]
    pub cereales: i32,

    #[serde(rename = "progressAgua", default = "sentinel")]
    pub agua: i32,
}

impl Default for DailyProgressRecord {
    fn default() -> Self {
        Self {
            child_age: 0,
            last_saved_date: String::new(),
            verduras: NO_PROGRESS_SENTINEL,
            animal: NO_PROGRESS_SENTINEL,
            leguminosas: NO_PROGRESS_SENTINEL,
            cereales: NO_PROGRESS_SENTINEL,
            agua: NO_PROGRESS_SENTINEL,
        }
    }
}

impl DailyProgressRecord {
    /// Stored remaining points for a group (may be the sentinel).
    pub fn counter(&self, id: FoodGroupId) -> i32 {
        match id {
            FoodGroupId::Verduras => self.verduras,
            FoodGroupId::Animal => self.animal,
            FoodGroupId::Leguminosas => self.leguminosas,
            FoodGroupId::Cereales => self.cereales,
            FoodGroupId::Agua => self.agua,
        }
    }

    pub fn set_counter(&mut self, id: FoodGroupId, value: i32) {
        let slot = match id {
            FoodGroupId::Verduras => &mut self.verduras,
            FoodGroupId::Animal => &mut self.animal,
            FoodGroupId::Leguminosas => &mut self.leguminosas,
            FoodGroupId::Cereales => &mut self.cereales,
            FoodGroupId::Agua => &mut self.agua,
        };
        *slot = value;
    }

    /// False while any counter still holds the sentinel.
    pub fn has_saved_progress(&self) -> bool {
        FoodGroupId::ALL
            .into_iter()
            .all(|id| self.counter(id) != NO_PROGRESS_SENTINEL)
    }
}

/// Mascot mood level derived from how much of today's target was eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompletionBucket {
    /// Nothing eaten yet.
    Empty = 0,
    /// Up to a third.
    Started = 1,
    /// Up to two thirds.
    Halfway = 2,
    /// More than two thirds.
    Almost = 3,
    /// Everything eaten.
    Complete = 4,
}

impl CompletionBucket {
    /// Numeric level, 0 through 4.
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Asset name of the mascot image for this level.
    pub fn mascot_image(self) -> &'static str {
        match self {
            CompletionBucket::Empty => "manzana0",
            CompletionBucket::Started => "manzana1",
            CompletionBucket::Halfway => "manzana2",
            CompletionBucket::Almost => "manzana3",
            CompletionBucket::Complete => "manzana4",
        }
    }
}

/// Bucket the aggregate completion of today's targets.
pub fn completion_bucket(total_target: u32, total_remaining: u32) -> CompletionBucket {
    if total_target == 0 || total_remaining == 0 {
        return CompletionBucket::Complete;
    }

    let consumed = total_target.saturating_sub(total_remaining) as f64;
    let ratio = consumed / total_target as f64;

    if ratio > 0.66 {
        CompletionBucket::Almost
    } else if ratio > 0.33 {
        CompletionBucket::Halfway
    } else if ratio > 0.0 {
        CompletionBucket::Started
    } else {
        CompletionBucket::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_has_no_progress() {
        let record = DailyProgressRecord::default();
        assert!(!record.has_saved_progress());
        assert_eq!(record.counter(FoodGroupId::Agua), NO_PROGRESS_SENTINEL);
    }

    #[test]
    fn test_single_sentinel_counts_as_unsaved() {
        let mut record = DailyProgressRecord::default();
        for id in FoodGroupId::ALL {
            record.set_counter(id, 2);
        }
        assert!(record.has_saved_progress());

        record.set_counter(FoodGroupId::Cereales, NO_PROGRESS_SENTINEL);
        assert!(!record.has_saved_progress());
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let record: DailyProgressRecord =
            serde_json::from_str(r#"{"childAge": 7, "progressAgua": 3}"#).unwrap();
        assert_eq!(record.child_age, 7);
        assert_eq!(record.agua, 3);
        assert_eq!(record.verduras, NO_PROGRESS_SENTINEL);
        assert!(record.last_saved_date.is_empty());
    }

    #[test]
    fn test_bucket_thresholds() {
        assert_eq!(completion_bucket(15, 15), CompletionBucket::Empty);
        assert_eq!(completion_bucket(15, 14), CompletionBucket::Started);
        // 5/15 = 0.333.. is just over the first threshold
        assert_eq!(completion_bucket(15, 10), CompletionBucket::Halfway);
        assert_eq!(completion_bucket(100, 67), CompletionBucket::Started);
        assert_eq!(completion_bucket(100, 34), CompletionBucket::Halfway);
        assert_eq!(completion_bucket(100, 33), CompletionBucket::Almost);
        assert_eq!(completion_bucket(100, 1), CompletionBucket::Almost);
        assert_eq!(completion_bucket(15, 0), CompletionBucket::Complete);
    }

    #[test]
    fn test_bucket_zero_target_is_complete() {
        assert_eq!(completion_bucket(0, 0), CompletionBucket::Complete);
    }

    #[test]
    fn test_mascot_images() {
        assert_eq!(CompletionBucket::Empty.mascot_image(), "manzana0");
        assert_eq!(CompletionBucket::Complete.mascot_image(), "manzana4");
        assert_eq!(CompletionBucket::Almost.level(), 3);
    }
}
