//! Planets - Main Entry Point
//!
//! Loads the configuration, wires the container and prints the first page
//! of planets sorted by name.

use planets::{AppConfiguration, AppContainer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = AppConfiguration::load()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&configuration.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Planets v{} against {}",
        env!("CARGO_PKG_VERSION"),
        configuration.api_base_url
    );

    let container = AppContainer::new(configuration)?;
    let model = container.make_planets_list_model();

    model.on_view_did_load().await;

    if let Some(error) = model.error() {
        eprintln!("{}: {error}", model.error_title());
        std::process::exit(1);
    }

    println!("{}", model.screen_title());
    for planet in model.planets() {
        println!(
            "  {:<20} {:<24} {}",
            planet.name, planet.climate, planet.population
        );
    }
    if model.has_next_page() {
        println!("  ...");
    }

    Ok(())
}
