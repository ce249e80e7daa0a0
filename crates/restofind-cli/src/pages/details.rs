//! Restaurant details page (`/restaurant/:id`).

use restofind_client::{FetchLifecycle, RestaurantClient, Ticket};
use restofind_core::Restaurant;

use crate::render;

#[derive(Default)]
pub(crate) struct DetailsPage {
    lifecycle: FetchLifecycle<String, Restaurant>,
}

impl DetailsPage {
    pub(crate) fn apply(&mut self, id: &str) -> Option<Ticket> {
        self.lifecycle.set_inputs(id.to_string())
    }

    pub(crate) async fn fetch(&mut self, client: &RestaurantClient, ticket: Ticket) {
        let Some(id) = self.lifecycle.inputs().cloned() else {
            return;
        };
        let result = client.get_restaurant(&id).await;
        self.lifecycle.complete(ticket, result);
    }

    pub(crate) fn render(&self) -> String {
        render::fetch_state(self.lifecycle.state(), "", render::details)
    }

    #[cfg(test)]
    pub(crate) fn lifecycle(&self) -> &FetchLifecycle<String, Restaurant> {
        &self.lifecycle
    }
}
