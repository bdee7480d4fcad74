pub mod prompts;
pub mod render;

pub use prompts::{prompt_age, prompt_yes_no, resolve_group, suggest_groups};
pub use render::{display_dashboard, display_examples, progress_dots};
