#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Fixed coordinates used in place of a device position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomeLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Origin of the restaurant API, without a trailing slash.
    pub api_base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub default_radius_km: f64,
    /// Terminal width in columns, used to pick the card grid layout.
    pub term_width: usize,
    pub home_location: Option<HomeLocation>,
}
