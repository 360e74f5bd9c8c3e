pub mod config;
pub mod domain;
pub mod event_sourcing;
pub mod metrics;
pub mod registry;
pub mod restaurant;

pub use config::RestaurantConfig;
pub use restaurant::{Restaurant, RestaurantError, SalesReport};
