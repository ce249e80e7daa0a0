//! Results-by-location page (`/restaurants/location`).

use restofind_client::{FetchLifecycle, RestaurantClient, Ticket};
use restofind_core::LocationResult;

use crate::render::{self, View};

const HEADING: &str = "Restaurants Around You 🌎";

/// Driving inputs, passed to the API verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LocationQuery {
    pub lat: String,
    pub lng: String,
    pub radius: String,
}

pub(crate) struct LocationPage {
    lifecycle: FetchLifecycle<LocationQuery, Vec<LocationResult>>,
    /// Radius echoed in the empty-state message.
    radius: String,
    default_radius: String,
}

impl LocationPage {
    pub(crate) fn new(default_radius_km: f64) -> Self {
        let default_radius = default_radius_km.to_string();
        Self {
            lifecycle: FetchLifecycle::new(),
            radius: default_radius.clone(),
            default_radius,
        }
    }

    /// Applies the URL parameters. Without both `lat` and `lng` the page
    /// goes idle and nothing is fetched.
    pub(crate) fn apply(
        &mut self,
        lat: Option<&str>,
        lng: Option<&str>,
        radius: Option<&str>,
    ) -> Option<Ticket> {
        self.radius = radius.unwrap_or(&self.default_radius).to_string();

        let (Some(lat), Some(lng)) = (lat, lng) else {
            self.lifecycle.reset();
            return None;
        };

        self.lifecycle.set_inputs(LocationQuery {
            lat: lat.to_string(),
            lng: lng.to_string(),
            radius: self.radius.clone(),
        })
    }

    pub(crate) async fn fetch(&mut self, client: &RestaurantClient, ticket: Ticket) {
        let Some(query) = self.lifecycle.inputs().cloned() else {
            return;
        };
        let result = client
            .search_by_location(&query.lat, &query.lng, &query.radius)
            .await;
        if let Ok(records) = &result {
            tracing::debug!(count = records.len(), lat = %query.lat, lng = %query.lng, "location results");
        }
        self.lifecycle.complete(ticket, result);
    }

    pub(crate) fn render(&self, view: View) -> String {
        let body = render::fetch_state(
            self.lifecycle.state(),
            "Enter a latitude and longitude to find restaurants nearby.",
            |results| {
                if results.is_empty() {
                    format!("No restaurants found within {} km.", self.radius)
                } else {
                    render::grid(results.iter().map(|r| &r.restaurant), view.width)
                }
            },
        );
        format!("{HEADING}\n\n{body}")
    }

    #[cfg(test)]
    pub(crate) fn lifecycle(&self) -> &FetchLifecycle<LocationQuery, Vec<LocationResult>> {
        &self.lifecycle
    }
}
