pub mod config;
pub mod observability;
pub mod routes;

pub use routes::{AppState, router};
