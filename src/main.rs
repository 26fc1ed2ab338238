use std::borrow::Cow;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::warn;

use meal_plan_analyzer_rs::analyzer::MealPlanAnalyzer;
use meal_plan_analyzer_rs::cli::{Cli, Command};
use meal_plan_analyzer_rs::error::Result;
use meal_plan_analyzer_rs::generation::{
    meal_plan_system_prompt, specialized_advice_prompt, AdviceDetails, AdviceModule,
};
use meal_plan_analyzer_rs::interface::{
    collect_user_profile, display_analysis, display_food_table, display_goals, prompt_yes_no,
    to_json, write_csv,
};
use meal_plan_analyzer_rs::models::UserProfile;
use meal_plan_analyzer_rs::reference::{
    load_reference, save_reference, NutritionReference, BUILTIN_REFERENCE,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let reference = active_reference(cli.reference.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Analyze { file, goal, json } => cmd_analyze(&reference, &file, &goal, json),
        Command::Batch { files, goal, csv } => cmd_batch(&reference, &files, &goal, &csv),
        Command::Foods => {
            display_food_table(&reference);
            Ok(())
        }
        Command::Goals => {
            display_goals(&reference);
            Ok(())
        }
        Command::Prompt {
            profile,
            interactive,
        } => cmd_prompt(&reference, profile.as_deref(), interactive),
        Command::Advice {
            module,
            age,
            cycle,
            pregnancy,
            weight,
            conditions,
            concerns,
        } => {
            let details = AdviceDetails {
                age,
                cycle_days: cycle,
                pregnancy,
                weight_kg: weight,
                conditions,
                concerns,
            };
            println!(
                "{}",
                specialized_advice_prompt(AdviceModule::from_title(&module), &details)
            );
            Ok(())
        }
        Command::ExportReference { out, force } => cmd_export_reference(&reference, &out, force),
    }
}

/// The built-in dataset, or the one loaded from `path`.
fn active_reference(path: Option<&Path>) -> Result<Cow<'static, NutritionReference>> {
    match path {
        Some(path) => Ok(Cow::Owned(load_reference(path)?)),
        None => Ok(Cow::Borrowed(&*BUILTIN_REFERENCE)),
    }
}

/// Warn about a goal the reference does not know, suggesting the closest one.
fn check_goal(reference: &NutritionReference, goal: &str) {
    if reference.goal(goal).is_some() {
        return;
    }
    match reference.closest_goal(goal) {
        Some(suggestion) => warn!(
            "Unknown goal '{}' (did you mean '{}'?); alignment will be N/A",
            goal, suggestion
        ),
        None => warn!("Unknown goal '{}'; alignment will be N/A", goal),
    }
}

fn read_plan(file: &str) -> Result<String> {
    if file == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(file)?)
    }
}

/// Analyze one plan file.
fn cmd_analyze(reference: &NutritionReference, file: &str, goal: &str, json: bool) -> Result<()> {
    check_goal(reference, goal);
    let text = read_plan(file)?;
    let analysis = MealPlanAnalyzer::new(reference).analyze(&text, goal);

    if json {
        println!("{}", to_json(&analysis)?);
    } else {
        display_analysis(&analysis);
    }
    Ok(())
}

/// Analyze many plan files into a CSV summary.
fn cmd_batch(reference: &NutritionReference, files: &[PathBuf], goal: &str, csv: &Path) -> Result<()> {
    check_goal(reference, goal);
    let analyzer = MealPlanAnalyzer::new(reference);

    let mut analyses = Vec::with_capacity(files.len());
    for path in files {
        let text = fs::read_to_string(path)?;
        analyses.push((path.display().to_string(), analyzer.analyze(&text, goal)));
    }

    write_csv(&analyses, csv)?;
    println!("Wrote {} analyses to {}", analyses.len(), csv.display());
    Ok(())
}

/// Print the meal plan instruction for a profile.
fn cmd_prompt(reference: &NutritionReference, profile: Option<&Path>, interactive: bool) -> Result<()> {
    let profile = if interactive {
        collect_user_profile(reference)?
    } else if let Some(path) = profile {
        serde_json::from_str(&fs::read_to_string(path)?)?
    } else {
        UserProfile::default()
    };

    println!("{}", meal_plan_system_prompt(&profile, reference));
    Ok(())
}

/// Write the active reference dataset to a file.
fn cmd_export_reference(reference: &NutritionReference, out: &Path, force: bool) -> Result<()> {
    if out.exists() && !force {
        let overwrite = prompt_yes_no(&format!("{} exists. Overwrite?", out.display()), false)?;
        if !overwrite {
            println!("Nothing written.");
            return Ok(());
        }
    }

    save_reference(out, reference)?;
    println!(
        "Wrote {} foods and {} goals to {}",
        reference.food_count(),
        reference.goal_count(),
        out.display()
    );
    Ok(())
}
