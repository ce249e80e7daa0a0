//! Maps routes to page components.

use restofind_client::{RestaurantClient, Ticket};
use restofind_core::{AppConfig, Route, SearchParams, Theme};

use crate::pages::{DetailsPage, LandingPage, LocationPage, RestaurantsPage};
use crate::render::View;

/// The page currently on screen.
#[derive(Default)]
pub(crate) enum Screen {
    #[default]
    Blank,
    Landing(LandingPage),
    Restaurants(RestaurantsPage),
    Location(LocationPage),
    Details(DetailsPage),
    NotFound(String),
}

impl Screen {
    /// Shows `route`. The current page is kept when it already serves the
    /// route's path, so only a change in parameters starts a new fetch.
    ///
    /// Returns the ticket for the fetch the page needs, if any.
    pub(crate) fn navigate(
        &mut self,
        route: &Route,
        config: &AppConfig,
        theme: Theme,
    ) -> Option<Ticket> {
        match route {
            Route::Landing => {
                if !matches!(self, Screen::Landing(_)) {
                    let params = SearchParams {
                        theme,
                        ..SearchParams::with_radius(config.default_radius_km)
                    };
                    *self = Screen::Landing(LandingPage::new(params));
                }
                None
            }
            Route::Restaurants { query } => {
                let mut page = match std::mem::take(self) {
                    Screen::Restaurants(page) => page,
                    _ => RestaurantsPage::default(),
                };
                let ticket = page.apply(query.as_deref());
                *self = Screen::Restaurants(page);
                ticket
            }
            Route::Location { lat, lng, radius } => {
                let mut page = match std::mem::take(self) {
                    Screen::Location(page) => page,
                    _ => LocationPage::new(config.default_radius_km),
                };
                let ticket = page.apply(lat.as_deref(), lng.as_deref(), radius.as_deref());
                *self = Screen::Location(page);
                ticket
            }
            Route::Details { id } => {
                let mut page = match std::mem::take(self) {
                    Screen::Details(page) => page,
                    _ => DetailsPage::default(),
                };
                let ticket = page.apply(id);
                *self = Screen::Details(page);
                ticket
            }
            Route::NotFound { path } => {
                *self = Screen::NotFound(path.clone());
                None
            }
        }
    }

    pub(crate) async fn fetch(&mut self, client: &RestaurantClient, ticket: Ticket) {
        match self {
            Screen::Restaurants(page) => page.fetch(client, ticket).await,
            Screen::Location(page) => page.fetch(client, ticket).await,
            Screen::Details(page) => page.fetch(client, ticket).await,
            Screen::Blank | Screen::Landing(_) | Screen::NotFound(_) => {}
        }
    }

    pub(crate) fn render(&self, view: View) -> String {
        match self {
            Screen::Blank => String::new(),
            Screen::Landing(page) => page.render(),
            Screen::Restaurants(page) => page.render(view),
            Screen::Location(page) => page.render(view),
            Screen::Details(page) => page.render(),
            Screen::NotFound(path) => format!("Page not found: {path}"),
        }
    }
}
