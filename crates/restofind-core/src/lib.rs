pub mod app_config;
pub mod config;
pub mod restaurant;
pub mod route;
pub mod search;

pub use app_config::{AppConfig, Environment, HomeLocation};
pub use config::{load_app_config, load_app_config_from_env};
pub use restaurant::{LocationResult, Restaurant, RestaurantLocation, Scalar, UserRating};
pub use route::{Route, RouteError};
pub use search::{SearchParams, Theme, DEFAULT_RADIUS_KM};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
