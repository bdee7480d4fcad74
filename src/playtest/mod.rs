pub mod autopilot;
pub mod output;
pub mod runner;

pub use autopilot::choose_target_x;
pub use output::{print_summary, write_csv, write_summary_json};
pub use runner::{run_playtest, run_session, summarize, PlaytestConfig, PlaytestSummary, SessionResult};
