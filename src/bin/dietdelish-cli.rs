// ABOUTME: Command-line front end for the recommendation engine and BMI calculator
// ABOUTME: Prints results as JSON so they can be piped into other tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `DietDelish` CLI
//!
//! Usage:
//! ```bash
//! # Weight-loss targets for a moderately active 28-year-old male
//! dietdelish-cli recommend --weight-kg 70 --height-cm 175 --age 28 --sex male \
//!     --activity moderate --goal weight_loss --diet non_veg
//!
//! # BMI readout
//! dietdelish-cli bmi --weight-kg 70 --height-cm 175
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use dietdelish::{
    config::nutrition::NutritionConfig,
    intelligence::{
        calculate_bmi, parse_activity_level, recommend, ActivityLevel, DietType, GoalType,
        NutritionError, RecommendationRequest, Sex, UserBiometricProfile,
    },
};

#[derive(Parser)]
#[command(
    name = "dietdelish-cli",
    about = "DietDelish nutrition calculator",
    long_about = "Compute daily calorie, macro, and meal-split targets or a BMI assessment from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a nutrition recommendation
    Recommend {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// "male" or anything else
        #[arg(long, default_value = "other")]
        sex: String,

        /// sedentary, light, moderate, active, or very_active
        #[arg(long, value_parser = parse_activity_level)]
        activity: ActivityLevel,

        /// weight_loss, weight_gain, muscle_gain, or general
        #[arg(long, default_value = "general")]
        goal: String,

        /// veg, non_veg, or vegan
        #[arg(long, value_parser = parse_diet_type)]
        diet: Option<DietType>,
    },

    /// Compute BMI and its category
    Bmi {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,
    },
}

fn parse_diet_type(label: &str) -> Result<DietType, NutritionError> {
    label.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = NutritionConfig::load()?;

    let output = match cli.command {
        Command::Recommend {
            weight_kg,
            height_cm,
            age,
            sex,
            activity,
            goal,
            diet,
        } => {
            let profile = UserBiometricProfile::new(
                weight_kg,
                height_cm,
                age,
                Sex::from_label(&sex),
                activity,
            )?;
            let request = RecommendationRequest {
                profile,
                goal_type: GoalType::from_str_or_default(&goal),
                diet_type: diet,
            };
            serde_json::to_value(recommend(&request, &config)?)?
        }
        Command::Bmi {
            weight_kg,
            height_cm,
        } => serde_json::to_value(calculate_bmi(weight_kg, height_cm)?)?,
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
