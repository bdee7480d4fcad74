use rand::Rng;

use crate::game::{FoodItem, GameSimulator};

/// Pick where a scripted player should drag to this tick.
///
/// Chases the lowest healthy item still above the player; with none in
/// sight, steps out from under the lowest junk item. `None` means stay put.
pub fn choose_target_x<R: Rng>(sim: &GameSimulator<R>) -> Option<f64> {
    let player = sim.player_position();
    let above = |item: &&FoodItem| item.position.y < player.y;

    let lowest_good = sim
        .items()
        .iter()
        .filter(|i| i.is_good())
        .filter(above)
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y));

    if let Some(item) = lowest_good {
        return Some(item.position.x);
    }

    let config = sim.config();
    let reach = (config.player_size.width * config.player_hitbox_scale
        + config.food_size.width * config.food_hitbox_scale)
        / 2.0;

    let threat = sim
        .items()
        .iter()
        .filter(|i| !i.is_good())
        .filter(above)
        .filter(|i| (i.position.x - player.x).abs() < reach)
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))?;

    let width = sim.play_area()?.width;
    // Dodge toward the side with more room
    if threat.position.x >= width / 2.0 {
        Some(threat.position.x - reach - 1.0)
    } else {
        Some(threat.position.x + reach + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Size};

    #[test]
    fn test_idle_when_nothing_falls() {
        let mut sim = GameSimulator::with_seed(GameConfig::default(), 3);
        sim.set_play_area_size(Size::new(300.0, 600.0));
        assert_eq!(choose_target_x(&sim), None);
    }
}
