use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::playtest::runner::{PlaytestSummary, SessionResult};

/// Write one CSV row per session.
pub fn write_csv(results: &[SessionResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for result in results {
        wtr.serialize(result)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the batch summary as pretty JSON.
pub fn write_summary_json(summary: &PlaytestSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn print_summary(summary: &PlaytestSummary, top: &[SessionResult]) {
    println!();
    println!("=== Playtest: {} sessions ===", summary.sessions);
    println!();
    println!("Average score:    {:.1}", summary.avg_score);
    println!("Best score:       {}", summary.max_score);
    println!("Average ticks:    {:.0}", summary.avg_ticks);
    println!("Good caught/game: {:.2}", summary.avg_good_collected);
    println!("Junk hit/game:    {:.2}", summary.avg_bad_hit);
    println!("Game over rate:   {:.0}%", summary.game_over_rate * 100.0);

    if top.is_empty() {
        return;
    }

    println!();
    println!("--- Top sessions ---");
    for (i, r) in top.iter().enumerate() {
        println!(
            "{:>3}. seed {:<8} score {:>5} | {:>6} ticks | good {:>3} junk {:>3} missed {:>3}{}",
            i + 1,
            r.seed,
            r.score,
            r.ticks,
            r.good_collected,
            r.bad_hit,
            r.missed,
            if r.game_over { "" } else { "  (cut off)" }
        );
    }
    println!();
}
