use crate::models::{FoodGroup, FoodGroupId};
use crate::state::ProgressSnapshot;

/// One filled dot per portion eaten, one hollow dot per portion left.
pub fn progress_dots(group: &FoodGroup) -> String {
    let eaten = "●".repeat(group.consumed_points() as usize);
    let left = "○".repeat(group.remaining_points() as usize);
    format!("{}{}", eaten, left)
}

/// Display today's dashboard.
pub fn display_dashboard(snapshot: &ProgressSnapshot) {
    println!();
    println!("=== Hoy ({}) - {} años ===", snapshot.date, snapshot.age);
    println!();

    let width = snapshot
        .groups
        .iter()
        .map(|g| g.name().chars().count())
        .max()
        .unwrap_or(10);

    for group in &snapshot.groups {
        let status = if group.is_complete() {
            "  ¡listo!".to_string()
        } else {
            format!("  faltan {}", group.remaining_points())
        };
        println!(
            "  {:<width$}  {}{}",
            group.name(),
            progress_dots(group),
            status,
            width = width
        );
    }

    println!();
    println!(
        "Mascota: {} (nivel {}/4) - {} de {} porciones",
        snapshot.bucket.mascot_image(),
        snapshot.bucket.level(),
        snapshot.total_target() - snapshot.total_remaining(),
        snapshot.total_target()
    );
    println!();
}

/// Display a group's example foods.
pub fn display_examples(id: FoodGroupId) {
    println!();
    println!("=== {} ===", id.display_name());
    for example in id.examples() {
        println!("  {} {}", example.emoji, example.name);
    }
    println!();
}
