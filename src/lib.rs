pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod probe;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use probe::{ApiProbe, DisplayLog, OutputSink, ProbeError, ProbeRun};
pub use state::AppState;
pub use storage::load_data;
