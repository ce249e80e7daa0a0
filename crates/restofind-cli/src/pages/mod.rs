//! Page components, one per client-side route.
//!
//! Data pages own a [`restofind_client::FetchLifecycle`]: `apply` feeds in the
//! route's parameters and returns a ticket when a request must be made,
//! `fetch` performs that request and completes the ticket, and `render`
//! draws whatever state the lifecycle is in.

pub(crate) mod details;
pub(crate) mod landing;
pub(crate) mod location;
pub(crate) mod restaurants;

pub(crate) use details::DetailsPage;
pub(crate) use landing::LandingPage;
pub(crate) use location::LocationPage;
pub(crate) use restaurants::RestaurantsPage;
