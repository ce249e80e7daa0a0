//! Drives navigation: mounts the page for a route, runs its fetch, and
//! renders the result.

use restofind_client::RestaurantClient;
use restofind_core::{AppConfig, Route, Theme};

use crate::render::{self, View};
use crate::router::Screen;

pub(crate) struct Browser {
    client: RestaurantClient,
    config: AppConfig,
    theme: Theme,
    screen: Screen,
    /// Print the loading state to stderr while a request is outstanding.
    show_progress: bool,
}

impl Browser {
    pub(crate) fn new(client: RestaurantClient, config: AppConfig, theme: Theme) -> Self {
        Self {
            client,
            config,
            theme,
            screen: Screen::default(),
            show_progress: false,
        }
    }

    pub(crate) fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Navigates to `route` and returns the rendered page once its fetch,
    /// if any, has finished.
    pub(crate) async fn navigate(&mut self, route: &Route) -> String {
        tracing::debug!(route = %route, "navigating");

        if let Some(ticket) = self.screen.navigate(route, &self.config, self.theme) {
            if self.show_progress {
                eprintln!("{}", render::LOADING);
            }
            self.screen.fetch(&self.client, ticket).await;
        }

        self.render()
    }

    pub(crate) fn render(&self) -> String {
        self.screen.render(View {
            width: self.config.term_width,
        })
    }

    #[cfg(test)]
    pub(crate) fn screen(&self) -> &Screen {
        &self.screen
    }
}

#[cfg(test)]
#[path = "browser_test.rs"]
mod tests;
