pub mod cli;
pub mod error;
pub mod game;
pub mod interface;
pub mod models;
pub mod playtest;
pub mod speech;
pub mod state;

pub use error::{NutriError, Result};
pub use game::{GameSimulator, GameState};
pub use models::{FoodGroup, FoodGroupId};
pub use state::DailyProgressTracker;
