pub mod config_manager;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod routes;
pub mod state;
pub mod translate;

pub use config_manager::Config;
pub use error::ApiError;
pub use routes::build_app;
pub use state::AppState;
