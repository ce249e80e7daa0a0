//! Search inputs collected by the landing page.

use std::fmt;

use crate::route::Route;

/// Radius in kilometres used when the user does not supply one.
pub const DEFAULT_RADIUS_KM: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Form state behind the landing page.
///
/// Coordinates stay as the text the user typed; they are only checked for
/// presence before navigating.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub query: String,
    pub latitude: String,
    pub longitude: String,
    pub radius: f64,
    pub theme: Theme,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::with_radius(DEFAULT_RADIUS_KM)
    }
}

impl SearchParams {
    #[must_use]
    pub fn with_radius(radius: f64) -> Self {
        Self {
            query: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            radius,
            theme: Theme::default(),
        }
    }

    /// Route for a free-text search. A blank query lists every restaurant.
    #[must_use]
    pub fn text_search_route(&self) -> Route {
        let trimmed = self.query.trim();
        Route::Restaurants {
            query: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    /// Route for a coordinate search, or `None` when either coordinate is
    /// blank.
    #[must_use]
    pub fn location_search_route(&self) -> Option<Route> {
        let lat = self.latitude.trim();
        let lng = self.longitude.trim();
        if lat.is_empty() || lng.is_empty() {
            return None;
        }
        Some(Route::location(lat, lng, &self.radius.to_string()))
    }
}
