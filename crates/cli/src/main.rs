#![warn(clippy::pedantic)]

//! Command line front end of the kettlebell workout generator.
//!
//! ```bash
//! # List beginner exercises for the core
//! kettle exercises --muscle-group core --difficulty beginner
//!
//! # Generate a 45 minute workout for back and chest
//! kettle generate -m back -m chest --energy high --duration 45
//!
//! # Perform a generated workout and store it
//! kettle run -m glutes --energy low --duration 30
//!
//! # Show the stored workouts
//! kettle history
//! ```

mod commands;

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use kettle_app::Theme;
use kettle_domain::{Difficulty, EnergyLevel, GenerationRequest, MuscleGroup, Units, UserID};
use kettle_storage::JsonStore;
use log::LevelFilter;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "kettle",
    version,
    about = "Kettlebell workout generator",
    long_about = "Generates randomized kettlebell workouts for selected muscle groups, energy level and duration, and keeps a history of completed workouts."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory for workouts, settings and logs
    #[arg(long, global = true, env = "KETTLE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// User owning the stored workouts
    #[arg(long, global = true, env = "KETTLE_USER", default_value_t = Uuid::nil())]
    user: Uuid,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List exercises of the catalog
    Exercises {
        #[arg(long, short = 'm')]
        muscle_group: Option<MuscleGroup>,

        #[arg(long, short = 'd')]
        difficulty: Option<Difficulty>,

        /// Only exercises whose name or description contains this text
        #[arg(long, short = 's', default_value = "")]
        search: String,
    },

    /// Show an exercise and its alternatives
    Exercise {
        id: String,

        /// Filter alternatives and list related exercises of other muscle groups
        #[arg(long, short = 's', default_value = "")]
        search: String,
    },

    /// Generate a workout
    Generate(GenerateArgs),

    /// Perform a workout at the prescribed reps and store it
    ///
    /// An interrupted workout is continued instead of generating a new one.
    Run(GenerateArgs),

    /// List completed workouts and statistics
    History {
        #[arg(long, default_value_t = 0)]
        offset: usize,

        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Show a completed workout
    Show { id: Uuid },

    /// Delete a completed workout
    Delete { id: Uuid },

    /// Show or change settings
    Settings {
        #[arg(long)]
        units: Option<Units>,

        #[arg(long)]
        theme: Option<Theme>,
    },
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    /// Muscle groups to train
    #[arg(long = "muscle-group", short = 'm', required = true)]
    muscle_groups: Vec<MuscleGroup>,

    #[arg(long, short = 'e', default_value_t = EnergyLevel::Medium)]
    energy: EnergyLevel,

    /// Available time in minutes, including warm-up and cool-down
    #[arg(long, short = 'd', default_value_t = 30)]
    duration: u32,

    /// Seed for a reproducible workout
    #[arg(long)]
    seed: Option<u64>,
}

impl From<&GenerateArgs> for GenerationRequest {
    fn from(value: &GenerateArgs) -> Self {
        Self {
            muscle_groups: value.muscle_groups.clone(),
            energy_level: value.energy,
            duration_minutes: value.duration,
        }
    }
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn data_dir(data_dir: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match data_dir {
        Some(dir) => Ok(dir),
        None => dirs::data_dir()
            .map(|dir| dir.join("kettle"))
            .context("failed to determine data directory, use --data-dir"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let store = JsonStore::new(data_dir(cli.data_dir)?);
    kettle_app::log::init(
        Arc::new(Mutex::new(store.clone())),
        level_filter(cli.verbose),
    )?;

    let context = commands::Context::new(store, UserID::from(cli.user));

    match cli.command {
        Command::Exercises {
            muscle_group,
            difficulty,
            search,
        } => context.exercises(muscle_group, difficulty, search),
        Command::Exercise { id, search } => context.exercise(&id, &search),
        Command::Generate(args) => context.generate(&(&args).into(), args.seed),
        Command::Run(args) => context.run(&(&args).into(), args.seed).await,
        Command::History { offset, limit } => context.history(offset, limit).await,
        Command::Show { id } => context.show(id.into()).await,
        Command::Delete { id } => context.delete(id.into()).await,
        Command::Settings { units, theme } => context.settings(units, theme).await,
    }
}
