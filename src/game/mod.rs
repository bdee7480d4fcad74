pub mod config;
pub mod geometry;
pub mod simulator;
pub mod state;

pub use config::GameConfig;
pub use geometry::{Point, Rect, Size};
pub use simulator::{GameSimulator, GameSnapshot, TickEvents};
pub use state::{Character, FoodItem, FoodKind, GameState, BAD_FOOD_SPRITES, CHARACTERS, GOOD_FOOD_SPRITES};
