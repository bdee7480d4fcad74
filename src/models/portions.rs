use crate::models::food_group::FoodGroupId;

/// Youngest age offered by the age picker.
pub const MIN_AGE: u32 = 3;

/// Oldest age offered by the age picker.
pub const MAX_AGE: u32 = 10;

/// Daily portion targets, one per food group in [`FoodGroupId::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortionTargets([u32; 5]);

/// Ages 3 to 5.
pub const TARGETS_3_TO_5: PortionTargets = PortionTargets([3, 2, 1, 4, 5]);

/// Ages 6 to 8.
pub const TARGETS_6_TO_8: PortionTargets = PortionTargets([4, 2, 2, 5, 6]);

/// Ages 9 to 10, also the fallback for any other age.
pub const TARGETS_9_TO_10: PortionTargets = PortionTargets([5, 3, 2, 6, 8]);

impl PortionTargets {
    pub const fn new(targets: [u32; 5]) -> Self {
        Self(targets)
    }

    /// Target for one group.
    pub fn get(&self, id: FoodGroupId) -> u32 {
        self.0[id.index()]
    }

    /// Sum over all groups.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn as_array(&self) -> [u32; 5] {
        self.0
    }
}

/// Map a child's age to its daily portion targets.
///
/// Ages outside 3..=10 (including 0, "unset") get the oldest band.
pub fn portions_for_age(age: u32) -> PortionTargets {
    match age {
        3..=5 => TARGETS_3_TO_5,
        6..=8 => TARGETS_6_TO_8,
        _ => TARGETS_9_TO_10,
    }
}
