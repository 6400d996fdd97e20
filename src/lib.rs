pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod routes;

pub use config::Config;
pub use error::Error;
pub use registry::{Activity, ActivityRegistry};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub registry: ActivityRegistry,
}
