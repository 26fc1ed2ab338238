use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::DEFAULT_GOAL;

/// Meal plan analyzer: nutrient, cost and goal-alignment estimates for meal plan text.
#[derive(Parser, Debug)]
#[command(name = "meal-plan-analyzer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Reference dataset JSON file (defaults to the built-in dataset).
    #[arg(short, long, global = true)]
    pub reference: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze one meal plan text file ("-" reads stdin).
    Analyze {
        file: String,

        /// Dietary goal, e.g. "weight loss" or weight_loss.
        #[arg(short, long, default_value = DEFAULT_GOAL)]
        goal: String,

        /// Print the analysis as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Analyze several plan files and write a CSV summary.
    Batch {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(short, long, default_value = DEFAULT_GOAL)]
        goal: String,

        /// Output CSV file.
        #[arg(long, default_value = "analysis_summary.csv")]
        csv: PathBuf,
    },

    /// List reference foods.
    Foods,

    /// List reference goals.
    Goals,

    /// Print the meal plan request instruction for a profile.
    Prompt {
        /// Profile JSON file.
        #[arg(long, conflicts_with = "interactive")]
        profile: Option<PathBuf>,

        /// Ask for the profile interactively.
        #[arg(short, long)]
        interactive: bool,
    },

    /// Print the instruction for a specialized advice module.
    Advice {
        /// "Women's Health", "Child Health" or "Elderly Health".
        module: String,

        #[arg(long)]
        age: Option<u32>,

        /// Cycle length in days.
        #[arg(long)]
        cycle: Option<u32>,

        #[arg(long)]
        pregnancy: Option<String>,

        /// Weight in kg.
        #[arg(long)]
        weight: Option<f64>,

        #[arg(long)]
        conditions: Option<String>,

        #[arg(long)]
        concerns: Option<String>,
    },

    /// Write the active reference dataset to a JSON file.
    ExportReference {
        out: PathBuf,

        /// Overwrite without asking.
        #[arg(long)]
        force: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Goals
    }
}
