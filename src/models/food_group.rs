use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NutriError;

/// One of the five fixed food groups tracked each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodGroupId {
    /// Vegetables and fruit.
    Verduras,
    /// Animal-origin protein.
    Animal,
    /// Legumes.
    Leguminosas,
    /// Grains and cereals.
    Cereales,
    /// Glasses of water.
    Agua,
}

impl FoodGroupId {
    /// All groups in dashboard order.
    pub const ALL: [FoodGroupId; 5] = [
        FoodGroupId::Verduras,
        FoodGroupId::Animal,
        FoodGroupId::Leguminosas,
        FoodGroupId::Cereales,
        FoodGroupId::Agua,
    ];

    /// Stable storage key.
    pub fn key(self) -> &'static str {
        match self {
            FoodGroupId::Verduras => "verduras",
            FoodGroupId::Animal => "animal",
            FoodGroupId::Leguminosas => "leguminosas",
            FoodGroupId::Cereales => "cereales",
            FoodGroupId::Agua => "agua",
        }
    }

    /// Position in [`FoodGroupId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name shown to the child.
    pub fn display_name(self) -> &'static str {
        match self {
            FoodGroupId::Verduras => "Verduras y frutas",
            FoodGroupId::Animal => "Origen animal",
            FoodGroupId::Leguminosas => "Leguminosas",
            FoodGroupId::Cereales => "Cereales",
            FoodGroupId::Agua => "Vasos de agua",
        }
    }

    /// Example foods for the group.
    pub fn examples(self) -> &'static [FoodExample] {
        match self {
            FoodGroupId::Verduras => &VERDURAS_EXAMPLES,
            FoodGroupId::Animal => &ANIMAL_EXAMPLES,
            FoodGroupId::Leguminosas => &LEGUMINOSAS_EXAMPLES,
            FoodGroupId::Cereales => &CEREALES_EXAMPLES,
            FoodGroupId::Agua => &AGUA_EXAMPLES,
        }
    }

    /// English aliases accepted on the command line.
    fn alias(self) -> &'static str {
        match self {
            FoodGroupId::Verduras => "produce",
            FoodGroupId::Animal => "protein",
            FoodGroupId::Leguminosas => "legumes",
            FoodGroupId::Cereales => "grains",
            FoodGroupId::Agua => "water",
        }
    }
}

impl fmt::Display for FoodGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FoodGroupId {
    type Err = NutriError;

    /// Parse a storage key or English alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        FoodGroupId::ALL
            .into_iter()
            .find(|id| id.key() == needle || id.alias() == needle)
            .ok_or_else(|| NutriError::UnknownFoodGroup(s.to_string()))
    }
}

/// An example food shown under a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodExample {
    pub name: &'static str,
    pub emoji: &'static str,
}

impl FoodExample {
    pub const fn new(name: &'static str, emoji: &'static str) -> Self {
        Self { name, emoji }
    }
}

const VERDURAS_EXAMPLES: [FoodExample; 5] = [
    FoodExample::new("Zanahoria", "🥕"),
    FoodExample::new("Brócoli", "🥦"),
    FoodExample::new("Naranja", "🍊"),
    FoodExample::new("Plátano", "🍌"),
    FoodExample::new("Manzana", "🍎"),
];

const ANIMAL_EXAMPLES: [FoodExample; 5] = [
    FoodExample::new("Pollo", "🍗"),
    FoodExample::new("Pescado", "🐟"),
    FoodExample::new("Huevo", "🥚"),
    FoodExample::new("Queso", "🧀"),
    FoodExample::new("Carne", "🥩"),
];

const LEGUMINOSAS_EXAMPLES: [FoodExample; 3] = [
    FoodExample::new("Frijoles", "🫘"),
    FoodExample::new("Lentejas", "🥘"),
    FoodExample::new("Maní", "🥜"),
];

const CEREALES_EXAMPLES: [FoodExample; 4] = [
    FoodExample::new("Tortilla", "🌮"),
    FoodExample::new("Avena", "🥣"),
    FoodExample::new("Pan", "🍞"),
    FoodExample::new("Arroz", "🍚"),
];

const AGUA_EXAMPLES: [FoodExample; 1] = [FoodExample::new("Agua Natural", "💧")];

/// Today's counter for one food group.
///
/// `remaining_points` always stays within `0..=target_points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodGroup {
    pub id: FoodGroupId,
    target_points: u32,
    remaining_points: u32,
}

impl FoodGroup {
    /// Build a counter, clamping `remaining` into `0..=target`.
    pub fn new(id: FoodGroupId, target_points: u32, remaining_points: u32) -> Self {
        Self {
            id,
            target_points,
            remaining_points: remaining_points.min(target_points),
        }
    }

    pub fn target_points(&self) -> u32 {
        self.target_points
    }

    pub fn remaining_points(&self) -> u32 {
        self.remaining_points
    }

    /// Portions eaten so far today.
    pub fn consumed_points(&self) -> u32 {
        self.target_points - self.remaining_points
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_points == 0
    }

    pub fn name(&self) -> &'static str {
        self.id.display_name()
    }

    pub fn examples(&self) -> &'static [FoodExample] {
        self.id.examples()
    }

    /// Mark one portion eaten. Returns false at zero.
    pub(crate) fn consume(&mut self) -> bool {
        if self.remaining_points == 0 {
            return false;
        }
        self.remaining_points -= 1;
        true
    }

    /// Give one portion back. Returns false at the target.
    pub(crate) fn restore(&mut self) -> bool {
        if self.remaining_points >= self.target_points {
            return false;
        }
        self.remaining_points += 1;
        true
    }
}
