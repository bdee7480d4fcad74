use clap::Parser;

use nutripekes::cli::{Cli, Command};
use nutripekes::error::Result;
use nutripekes::interface::{
    display_dashboard, display_examples, prompt_age, prompt_yes_no, resolve_group,
};
use nutripekes::speech::{ConsoleSpeaker, SpeechBackend, SpeechService};
use nutripekes::state::{DailyProgressTracker, JsonFileStore, SystemClock};

type Tracker = DailyProgressTracker<JsonFileStore, SystemClock>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    if let Command::Examples { group } = &command {
        let mut speech = SpeechService::new(ConsoleSpeaker::stdout());
        return cmd_examples(&mut speech, group);
    }

    let ask_age = !matches!(command, Command::Age { .. });
    let mut tracker = open_tracker(&cli.file, ask_age)?;

    match command {
        Command::Status => cmd_status(&tracker),
        Command::Eat { group } => cmd_eat(&mut tracker, &group),
        Command::Undo { group } => cmd_undo(&mut tracker, &group),
        Command::Age { age } => cmd_age(&mut tracker, age),
        Command::Reset { yes } => cmd_reset(&mut tracker, yes),
        Command::Examples { .. } => Ok(()),
    }
}

/// Open the tracker, asking for the age first if none is stored yet.
fn open_tracker(file_path: &str, ask_age: bool) -> Result<Tracker> {
    let mut tracker = DailyProgressTracker::open(JsonFileStore::new(file_path), SystemClock)?;
    if ask_age && tracker.age() == 0 {
        println!("¡Bienvenido!");
        let age = prompt_age()?;
        tracker.set_age(age)?;
    }
    Ok(tracker)
}

/// Show today's dashboard. Opening the tracker already applied the daily reset.
fn cmd_status(tracker: &Tracker) -> Result<()> {
    display_dashboard(&tracker.snapshot());
    Ok(())
}

fn cmd_eat(tracker: &mut Tracker, group: &str) -> Result<()> {
    let id = resolve_group(group)?;
    if tracker.consume(id)? {
        println!("¡Muy bien! Una porción de {} menos.", id.display_name());
    } else {
        println!("Ya completaste {} por hoy.", id.display_name());
    }
    display_dashboard(&tracker.snapshot());
    Ok(())
}

fn cmd_undo(tracker: &mut Tracker, group: &str) -> Result<()> {
    let id = resolve_group(group)?;
    if !tracker.restore(id)? {
        println!("No hay porciones de {} que regresar.", id.display_name());
    }
    display_dashboard(&tracker.snapshot());
    Ok(())
}

fn cmd_age(tracker: &mut Tracker, age: Option<u32>) -> Result<()> {
    let age = match age {
        Some(age) => age,
        None => {
            println!("La edad actual es: {} años", tracker.age());
            prompt_age()?
        }
    };
    tracker.set_age(age)?;
    println!("Edad guardada: {} años. El progreso de hoy se reinició.", age);
    display_dashboard(&tracker.snapshot());
    Ok(())
}

fn cmd_reset(tracker: &mut Tracker, yes: bool) -> Result<()> {
    if !yes && !prompt_yes_no("¿Reiniciar el progreso de hoy?", false)? {
        return Ok(());
    }
    let age = tracker.age();
    tracker.reload_data(age, true)?;
    println!("Progreso reiniciado.");
    display_dashboard(&tracker.snapshot());
    Ok(())
}

fn cmd_examples<B: SpeechBackend>(speech: &mut SpeechService<B>, group: &str) -> Result<()> {
    let id = resolve_group(group)?;
    display_examples(id);

    let names: Vec<&str> = id.examples().iter().map(|e| e.name).collect();
    let text = format!("{}: {}", id.display_name(), names.join(", "));
    speech.speak(&text, id.key());
    speech.finished();
    Ok(())
}
