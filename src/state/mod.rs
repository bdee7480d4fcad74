mod clock;
mod persistence;
mod tracker;

pub use clock::{format_date, Clock, FixedClock, SystemClock, DATE_FORMAT};
pub use persistence::{load_record, save_record, JsonFileStore, MemoryStore, ProgressStore};
pub use tracker::{DailyProgressTracker, ProgressSnapshot};
