use clap::{Parser, Subcommand};

/// NutriPekes — daily food-group portions for kids.
#[derive(Parser, Debug)]
#[command(name = "nutripekes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the progress JSON file.
    #[arg(short, long, default_value = "nutripekes_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show today's portions and the mascot.
    Status,

    /// Mark one portion of a food group as eaten.
    Eat {
        /// Food group (verduras, animal, leguminosas, cereales, agua).
        group: String,
    },

    /// Undo one portion of a food group.
    Undo {
        /// Food group (verduras, animal, leguminosas, cereales, agua).
        group: String,
    },

    /// Set the child's age. Restarts today's progress.
    Age {
        /// Age in years (3 to 10). Prompts when omitted.
        age: Option<u32>,
    },

    /// Restart today's progress.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// List a group's example foods and read them aloud.
    Examples {
        /// Food group (verduras, animal, leguminosas, cereales, agua).
        group: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Status
    }
}
