// ABOUTME: Server binary exposing the nutrition recommendation engine over HTTP
// ABOUTME: Loads configuration from the environment, initializes logging, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `DietDelish` Server Binary
//!
//! Starts the HTTP API with the recommendation and BMI endpoints.

use anyhow::Result;
use clap::Parser;
use dietdelish::{
    config::{environment::ServerConfig, nutrition::NutritionConfig},
    constants::endpoints,
    logging,
    server::{self, AppState},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "dietdelish-server")]
#[command(about = "DietDelish nutrition API - calorie, macro, and meal-split recommendations")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_from_env()?;

    info!("{}", config.summary());

    let nutrition = NutritionConfig::load()?;
    info!("Nutrition configuration loaded and validated");

    display_available_endpoints(&config);

    let state = Arc::new(AppState::new(nutrition, config));
    if let Err(e) = server::serve(state).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}

fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());
    info!("POST {base}{}", endpoints::MEAL_RECOMMENDATIONS);
    info!("POST {base}{}", endpoints::BMI);
    info!("GET  {base}{}", endpoints::HEALTH_CHECK);
    info!("GET  {base}{}", endpoints::READY_CHECK);
}
