pub mod app;
pub mod coerce;
pub mod config;
pub mod errors;
pub mod estimator;
pub mod handlers;
pub mod insights;
pub mod models;
pub mod profile;
pub mod situation;
pub mod state;
pub mod stubs;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use estimator::{EmissionsInput, EmissionsResult, estimate};
pub use profile::{GeneralProfileInput, estimate_general};
pub use state::AppState;
