pub mod client;
pub mod error;
pub mod lifecycle;

pub use client::RestaurantClient;
pub use error::ClientError;
pub use lifecycle::{FetchLifecycle, FetchState, Ticket};
