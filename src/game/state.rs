use crate::game::geometry::Point;

/// Phases of one mini-game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    CharacterSelection,
    Instructions,
    Countdown,
    Playing,
    GameOver,
}

/// A selectable player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub id: &'static str,
    pub name: &'static str,
    pub image_name: &'static str,
}

pub const CHARACTERS: [Character; 2] = [
    Character {
        id: "nino",
        name: "Niño",
        image_name: "niño_personaje",
    },
    Character {
        id: "nina",
        name: "Niña",
        image_name: "niña_personaje",
    },
];

impl Character {
    pub fn by_id(id: &str) -> Option<Character> {
        CHARACTERS.into_iter().find(|c| c.id == id)
    }
}

/// Healthy items add score and a life; junk costs a life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Good,
    Bad,
}

pub const GOOD_FOOD_SPRITES: [&str; 4] = ["brocoli_img", "manzana_img", "zanahoria_img", "fresa_img"];

pub const BAD_FOOD_SPRITES: [&str; 2] = ["papitas_img", "soda_img"];

impl FoodKind {
    pub fn sprites(self) -> &'static [&'static str] {
        match self {
            FoodKind::Good => &GOOD_FOOD_SPRITES,
            FoodKind::Bad => &BAD_FOOD_SPRITES,
        }
    }
}

/// A falling food item. `position` is its center.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub id: u64,
    pub position: Point,
    pub sprite: &'static str,
    pub kind: FoodKind,
}

impl FoodItem {
    pub fn is_good(&self) -> bool {
        self.kind == FoodKind::Good
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_lookup() {
        assert_eq!(Character::by_id("nina").map(|c| c.name), Some("Niña"));
        assert!(Character::by_id("robot").is_none());
    }

    #[test]
    fn test_sprite_lists_match_kind() {
        assert!(FoodKind::Good.sprites().contains(&"fresa_img"));
        assert!(FoodKind::Bad.sprites().contains(&"soda_img"));
    }
}
