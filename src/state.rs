use crate::sounds::SoundAssets;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub sounds: SoundAssets,
    /// Serializes the load, compute and persist steps of each request.
    pub store_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, sounds: SoundAssets) -> Self {
        Self {
            data_path,
            sounds,
            store_lock: Arc::new(Mutex::new(())),
        }
    }
}
