use crate::models::AppData;
use crate::probe::{ApiProbe, DisplayLog};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub probe: ApiProbe,
    pub display: DisplayLog,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData, probe: ApiProbe) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            probe,
            display: DisplayLog::new(),
        }
    }
}
