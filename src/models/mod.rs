pub mod food_group;
pub mod portions;
pub mod progress;

pub use food_group::{FoodExample, FoodGroup, FoodGroupId};
pub use portions::{portions_for_age, PortionTargets, MAX_AGE, MIN_AGE};
pub use progress::{completion_bucket, CompletionBucket, DailyProgressRecord, NO_PROGRESS_SENTINEL};
