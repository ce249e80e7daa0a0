mod browser;
mod geolocation;
mod pages;
mod render;
mod router;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use restofind_client::RestaurantClient;
use restofind_core::{AppConfig, Route, SearchParams};
use tracing_subscriber::EnvFilter;

use crate::browser::Browser;
use crate::geolocation::ConfiguredLocation;
use crate::pages::LandingPage;

#[derive(Debug, Parser)]
#[command(name = "restofind")]
#[command(about = "Find restaurants by name or location")]
struct Cli {
    /// Switch the landing page to the dark theme.
    #[arg(long, global = true)]
    dark: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Open one or more client-side routes in order, e.g. `/restaurant/42`.
    Open {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Search restaurants by name or id. No query lists everything.
    Search { query: Vec<String> },
    /// Search restaurants around a coordinate.
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        lng: Option<String>,
        /// Search radius in km.
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Search restaurants around the configured home location.
    Here {
        /// Search radius in km.
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Show one restaurant's details.
    Show { id: String },
    /// List every restaurant.
    All,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = restofind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, api = %config.api_base_url, "starting");
    run(cli, config).await
}

async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<ExitCode> {
    let client = RestaurantClient::new(&config)?;
    let geolocator = ConfiguredLocation::from_config(&config);

    let mut landing = LandingPage::new(SearchParams::with_radius(config.default_radius_km));
    if cli.dark {
        landing.toggle_theme();
    }
    let mut browser = Browser::new(client, config, landing.params.theme).with_progress(true);

    let route = match cli.command {
        None => Route::Landing,
        Some(Commands::Open { urls }) => {
            let routes = urls
                .iter()
                .map(String::as_str)
                .map(Route::parse)
                .collect::<Result<Vec<_>, _>>()?;
            let mut pages = Vec::with_capacity(routes.len());
            for route in &routes {
                pages.push(browser.navigate(route).await);
            }
            println!("{}", pages.join("\n\n"));
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Search { query }) => {
            landing.params.query = query.join(" ");
            landing.search()
        }
        Some(Commands::Nearby { lat, lng, radius }) => {
            landing.params.latitude = lat.unwrap_or_default();
            landing.params.longitude = lng.unwrap_or_default();
            if let Some(radius) = radius {
                landing.params.radius = radius;
            }
            let Some(route) = landing.search_nearby() else {
                eprintln!("Enter both a latitude and a longitude to search nearby.");
                return Ok(ExitCode::FAILURE);
            };
            route
        }
        Some(Commands::Here { radius }) => {
            if let Some(radius) = radius {
                landing.params.radius = radius;
            }
            match landing.use_my_location(&geolocator).await {
                Ok(route) => route,
                Err(alert) => {
                    eprintln!("alert: {alert}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some(Commands::Show { id }) => Route::Details { id },
        Some(Commands::All) => landing.view_all(),
    };

    println!("{}", browser.navigate(&route).await);
    Ok(ExitCode::SUCCESS)
}
