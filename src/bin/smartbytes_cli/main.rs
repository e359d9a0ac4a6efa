// ABOUTME: SmartBytes CLI for goal targets, protein estimates, menus, and nearby restaurants
// ABOUTME: Reuses the server's services so results match the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes
//!
//! Usage:
//! ```bash
//! # Daily targets for a profile (imperial units, as in onboarding)
//! smartbytes-cli goals --age 25 --height-in 67 --weight-lb 154 --sex male --goal build-muscle --activity-level 2
//!
//! # Estimate protein for a food, optionally with known macros
//! smartbytes-cli estimate "grilled chicken breast" --calories 300 --fat 8 --carbs 0
//!
//! # Ranked menu for a restaurant
//! smartbytes-cli menu "Chipotle" --sort protein_ratio_desc --max-calories 800
//!
//! # Nearby restaurants that have menu data
//! smartbytes-cli nearby --lat 39.68 --lng -75.75 --with-menu
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use smartbytes::config::ServerConfig;
use smartbytes::ServerResources;
use smartbytes_core::models::{MenuFilters, Sex};
use smartbytes_providers::http_client::initialize_shared_client;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "smartbytes-cli",
    about = "SmartBytes command-line tool",
    long_about = "Compute goal targets, estimate protein, and rank restaurant menus from the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Daily calorie and protein targets for a profile
    Goals {
        /// Age in years
        #[arg(long)]
        age: u32,
        /// Height in inches
        #[arg(long)]
        height_in: f64,
        /// Weight in pounds
        #[arg(long)]
        weight_lb: f64,
        /// male or female
        #[arg(long, default_value = "male")]
        sex: Sex,
        /// build-muscle, lose-weight, or maintain
        #[arg(long, default_value = "maintain")]
        goal: String,
        /// Activity level 1 (low) to 3 (high)
        #[arg(long, default_value = "2")]
        activity_level: u8,
    },

    /// Estimate protein grams for a food
    Estimate {
        /// Food name
        food_name: String,
        /// Known calories (kcal)
        #[arg(long)]
        calories: Option<f64>,
        /// Known total fat (g)
        #[arg(long)]
        fat: Option<f64>,
        /// Known total carbohydrates (g)
        #[arg(long)]
        carbs: Option<f64>,
    },

    /// Ranked menu for a restaurant
    Menu {
        /// Restaurant name
        restaurant: String,
        /// Sort option (e.g. `protein_ratio_desc`)
        #[arg(long)]
        sort: Option<String>,
        /// Calorie ceiling
        #[arg(long)]
        max_calories: Option<f64>,
        /// Protein floor in grams
        #[arg(long)]
        min_protein: Option<f64>,
        /// Only vegetarian items
        #[arg(long)]
        vegetarian: bool,
    },

    /// Restaurants near a point
    Nearby {
        /// Latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Radius in meters
        #[arg(long)]
        radius: Option<u32>,
        /// Maximum places to request
        #[arg(long)]
        limit: Option<u32>,
        /// Only restaurants with menu data
        #[arg(long)]
        with_menu: bool,
    },
}

fn load_resources() -> Result<Arc<ServerResources>> {
    let config = ServerConfig::from_env()?;
    initialize_shared_client(
        config.providers.timeout_secs,
        config.providers.connect_timeout_secs,
    );
    Ok(Arc::new(ServerResources::from_config(config)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("SmartBytes CLI");

    match cli.command {
        Command::Goals {
            age,
            height_in,
            weight_lb,
            sex,
            goal,
            activity_level,
        } => commands::goals::run(age, height_in, weight_lb, sex, goal, activity_level),
        Command::Estimate {
            food_name,
            calories,
            fat,
            carbs,
        } => {
            commands::nutrition::estimate(load_resources()?, &food_name, calories, fat, carbs)
                .await
        }
        Command::Menu {
            restaurant,
            sort,
            max_calories,
            min_protein,
            vegetarian,
        } => {
            let filters = MenuFilters {
                max_calories,
                min_protein,
                vegetarian,
            };
            commands::menu::ranked(load_resources()?, &restaurant, sort.as_deref(), &filters).await
        }
        Command::Nearby {
            lat,
            lng,
            radius,
            limit,
            with_menu,
        } => commands::menu::nearby(load_resources()?, lat, lng, radius, limit, with_menu).await,
    }
}
