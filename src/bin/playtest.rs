use std::fs;
use std::path::PathBuf;

use clap::Parser;

use nutripekes::game::{GameConfig, Size};
use nutripekes::playtest::{
    print_summary, run_playtest, summarize, write_csv, write_summary_json, PlaytestConfig,
};

#[derive(Parser, Debug)]
#[command(name = "playtest")]
#[command(about = "Headless autopiloted runs of the falling-food mini-game")]
struct Args {
    /// Number of sessions to play
    #[arg(long, default_value = "100")]
    sessions: usize,

    /// Seed of the first session; later sessions use consecutive seeds
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Tick limit per session (50 ms each at the default rate)
    #[arg(long, default_value = "12000")]
    max_ticks: u64,

    /// Play area width in points
    #[arg(long, default_value = "390")]
    width: f64,

    /// Play area height in points
    #[arg(long, default_value = "844")]
    height: f64,

    /// Game config JSON overriding the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output CSV file with one row per session
    #[arg(long, default_value = "playtest_sessions.csv")]
    csv: PathBuf,

    /// Output JSON file with the batch summary
    #[arg(long, default_value = "playtest_summary.json")]
    json: PathBuf,

    /// Number of best sessions to display
    #[arg(long, default_value = "5")]
    topk: usize,
}

fn load_game_config(path: Option<&PathBuf>) -> GameConfig {
    let Some(path) = path else {
        return GameConfig::default();
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading game config {:?}: {}", path, e);
            std::process::exit(1);
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error parsing game config JSON: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if !Size::new(args.width, args.height).is_usable() {
        eprintln!("Error: play area must have a finite, positive size");
        std::process::exit(1);
    }

    let game = load_game_config(args.config.as_ref());
    if !(0.0..=1.0).contains(&game.spawn_probability) {
        eprintln!("Error: spawn_probability must be within 0 and 1");
        std::process::exit(1);
    }

    let config = PlaytestConfig {
        sessions: args.sessions,
        seed: args.seed,
        max_ticks: args.max_ticks,
        play_area: Size::new(args.width, args.height),
        game,
    };

    println!(
        "Running {} sessions from seed {} ({} ticks max)...",
        config.sessions, config.seed, config.max_ticks
    );

    let mut results = run_playtest(&config);
    let summary = summarize(&results);

    if let Err(e) = write_csv(&results, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote {} sessions to {:?}", results.len(), args.csv);
    }

    if let Err(e) = write_summary_json(&summary, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summary to {:?}", args.json);
    }

    results.sort_by(|a, b| b.score.cmp(&a.score).then(a.seed.cmp(&b.seed)));
    results.truncate(args.topk);
    print_summary(&summary, &results);
}
