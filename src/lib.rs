pub mod aggregate;
pub mod app;
pub mod charts;
pub mod config;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod models;
pub mod plans;
pub mod state;
pub mod stats;
pub mod ui;
pub mod validate;

pub use aggregate::{Aggregator, MetTable, Tier};
pub use app::router;
pub use config::{Capabilities, Config};
pub use state::AppState;
pub use validate::ValidationError;
