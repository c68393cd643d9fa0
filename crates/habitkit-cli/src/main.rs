use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "habitkit-cli", version, about = "HabitKit CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Mark and unmark calendar days
    Track {
        #[command(subcommand)]
        action: commands::track::TrackAction,
    },
    /// Streaks and progress statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Premium subscription management
    Premium {
        #[command(subcommand)]
        action: commands::premium::PremiumAction,
    },
    /// Export habit data as readable text
    Export {
        /// Output file path
        #[arg(long, default_value = "habit_data_export.txt")]
        out: PathBuf,
    },
    /// Bulk data reset
    Reset {
        /// Remove all checkmarks from all habits
        #[arg(long)]
        all_marks: bool,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Track { action } => commands::track::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Premium { action } => commands::premium::run(action),
        Commands::Export { out } => commands::export::run(&out),
        Commands::Reset { all_marks } => commands::reset::run(all_marks),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "habitkit-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
