//! Landing page: collects search input and turns it into a route.
//!
//! Never calls the API itself.

use restofind_core::{Route, SearchParams, Theme};

use crate::geolocation::{GeolocationError, Geolocator};

pub(crate) struct LandingPage {
    pub params: SearchParams,
}

impl LandingPage {
    pub(crate) fn new(params: SearchParams) -> Self {
        Self { params }
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.params.theme = self.params.theme.toggled();
    }

    /// Text search. A blank query lists every restaurant.
    pub(crate) fn search(&self) -> Route {
        self.params.text_search_route()
    }

    /// Coordinate search; `None` (no navigation) unless both coordinates are
    /// filled in.
    pub(crate) fn search_nearby(&self) -> Option<Route> {
        self.params.location_search_route()
    }

    /// Resolves the current position, fills the coordinate fields with it,
    /// and routes to a nearby search.
    ///
    /// # Errors
    ///
    /// Returns the [`GeolocationError`] to show as an alert; nothing is
    /// navigated in that case.
    pub(crate) async fn use_my_location<G: Geolocator>(
        &mut self,
        geolocator: &G,
    ) -> Result<Route, GeolocationError> {
        let position = match geolocator.current_position().await {
            Ok(position) => position,
            Err(e) => {
                if let GeolocationError::Unavailable { reason } = &e {
                    tracing::warn!(%reason, "error getting location");
                }
                return Err(e);
            }
        };

        self.params.latitude = position.latitude.to_string();
        self.params.longitude = position.longitude.to_string();

        Ok(Route::location(
            &self.params.latitude,
            &self.params.longitude,
            &self.params.radius.to_string(),
        ))
    }

    /// Clears the query and lists every restaurant.
    pub(crate) fn view_all(&mut self) -> Route {
        self.params.query.clear();
        Route::Restaurants { query: None }
    }

    pub(crate) fn render(&self) -> String {
        let toggle = match self.params.theme {
            Theme::Light => "☾ switch to dark mode with --dark",
            Theme::Dark => "☀ dark mode on; drop --dark for light mode",
        };
        let rule = match self.params.theme {
            Theme::Light => "─",
            Theme::Dark => "━",
        }
        .repeat(40);

        let field = |value: &str, placeholder: &str| {
            if value.is_empty() {
                format!("<{placeholder}>")
            } else {
                value.to_string()
            }
        };

        [
            toggle.to_string(),
            String::new(),
            "Find Your Favorite Restaurants 🍽️".to_string(),
            rule.clone(),
            format!(
                "Search:     {}",
                field(&self.params.query, "Search by Name or ID...")
            ),
            "            restofind search <QUERY>".to_string(),
            rule.clone(),
            format!(
                "Latitude:   {}",
                field(&self.params.latitude, "Enter Latitude...")
            ),
            format!(
                "Longitude:  {}",
                field(&self.params.longitude, "Enter Longitude...")
            ),
            format!("Radius:     {} km", self.params.radius),
            "Search Nearby:".to_string(),
            "            restofind nearby --lat <LAT> --lng <LNG> [--radius <KM>]".to_string(),
            "Use My Location for Nearby Restaurants:".to_string(),
            "            restofind here [--radius <KM>]".to_string(),
            rule,
            "View All Restaurants:".to_string(),
            "            restofind all".to_string(),
        ]
        .join("\n")
    }
}

#[cfg(test)]
#[path = "landing_test.rs"]
mod tests;
