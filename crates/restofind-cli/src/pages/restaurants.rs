//! Restaurant list page (`/restaurants`), optionally filtered by `query`.

use restofind_client::{FetchLifecycle, RestaurantClient, Ticket};
use restofind_core::Restaurant;

use crate::render::{self, View};

#[derive(Default)]
pub(crate) struct RestaurantsPage {
    lifecycle: FetchLifecycle<Option<String>, Vec<Restaurant>>,
}

impl RestaurantsPage {
    pub(crate) fn apply(&mut self, query: Option<&str>) -> Option<Ticket> {
        self.lifecycle.set_inputs(query.map(str::to_string))
    }

    pub(crate) async fn fetch(&mut self, client: &RestaurantClient, ticket: Ticket) {
        let Some(query) = self.lifecycle.inputs().cloned() else {
            return;
        };
        let result = client.search_restaurants(query.as_deref()).await;
        self.lifecycle.complete(ticket, result);
    }

    pub(crate) fn render(&self, view: View) -> String {
        let heading = match self.lifecycle.inputs() {
            Some(Some(query)) => format!("Results for \"{query}\""),
            _ => "All Restaurants".to_string(),
        };
        let body = render::fetch_state(self.lifecycle.state(), "", |list| {
            if list.is_empty() {
                "No restaurants found.".to_string()
            } else {
                render::grid(list, view.width)
            }
        });
        format!("{heading}\n\n{body}")
    }
}
