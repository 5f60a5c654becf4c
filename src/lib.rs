pub mod app;
pub mod challenge;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod sounds;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
pub use storage::load_record;
