//! pinguino - penguin species prediction form
//!
//! Usage:
//!   pinguino predict                      # Interactive form, model at ./penguin_model.pgn
//!   pinguino predict -m model.pgn --island Biscoe --sex FEMALE \
//!       --culmen-length 44 --culmen-depth 17 --flipper-length 200 \
//!       --body-mass 4200 --delta-15-n 8.7 --delta-13-c -25.6 --json
//!   pinguino inspect model.pgn            # Artifact metadata

use clap::{Parser, Subcommand};
use pinguino::schema::{Island, Sex};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;
mod form;
mod output;

use form::PartialRecord;

/// pinguino - predict a penguin's species from its measurements
#[derive(Parser)]
#[command(name = "pinguino")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the species from eight measurements (prompts for missing fields)
    Predict {
        /// Path to the model artifact
        #[arg(short, long, default_value = "penguin_model.pgn")]
        model: PathBuf,

        /// Island of observation (Biscoe, Dream, Torgersen)
        #[arg(long)]
        island: Option<Island>,

        /// Sex (FEMALE, MALE)
        #[arg(long)]
        sex: Option<Sex>,

        /// Culmen length in mm (30 to 60)
        #[arg(long)]
        culmen_length: Option<f32>,

        /// Culmen depth in mm (13 to 22)
        #[arg(long)]
        culmen_depth: Option<f32>,

        /// Flipper length in mm (170 to 235)
        #[arg(long)]
        flipper_length: Option<f32>,

        /// Body mass in g (2700 to 6300)
        #[arg(long)]
        body_mass: Option<f32>,

        /// Delta 15 N in o/oo (7 to 10)
        #[arg(long)]
        delta_15_n: Option<f32>,

        /// Delta 13 C in o/oo (-28 to -23)
        #[arg(long, allow_hyphen_values = true)]
        delta_13_c: Option<f32>,
    },

    /// Show artifact metadata
    Inspect {
        /// Path to the model artifact
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Predict {
            model,
            island,
            sex,
            culmen_length,
            culmen_depth,
            flipper_length,
            body_mass,
            delta_15_n,
            delta_13_c,
        } => {
            let partial = PartialRecord {
                island,
                sex,
                culmen_length_mm: culmen_length,
                culmen_depth_mm: culmen_depth,
                flipper_length_mm: flipper_length,
                body_mass_g: body_mass,
                delta_15_n,
                delta_13_c,
            };
            commands::predict::run(&model, partial, cli.json)
        }

        Commands::Inspect { file } => commands::inspect::run(&file, cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
