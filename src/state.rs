use crate::error::{LocatorError, Result};
use crate::history::{NavigationHistory, Route, DEFAULT_CAPACITY};
use crate::io::atomic_write;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize)]
struct HistorySerde {
    #[serde(default = "default_capacity")]
    capacity: usize,
    #[serde(default)]
    routes: Vec<Route>,
}

fn default_capacity() -> usize { DEFAULT_CAPACITY }

pub fn default_state_path() -> PathBuf {
    let cache = home::home_dir().unwrap_or_else(|| PathBuf::from("."));
    cache.join(".cache").join("folder-locator").join("history.json")
}

/// Missing or unreadable state starts a fresh history.
pub fn load_history_or_default(path: Option<&PathBuf>) -> NavigationHistory {
    let path = path.cloned().unwrap_or_else(default_state_path);
    if let Ok(bytes) = fs::read(&path) {
        match serde_json::from_slice::<HistorySerde>(&bytes) {
            Ok(s) => {
                let mut h = NavigationHistory::with_capacity(s.capacity);
                for r in s.routes { h.push(r); }
                return h;
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable history"),
        }
    }
    NavigationHistory::default()
}

pub fn save_history(path: &Path, history: &NavigationHistory) -> Result<()> {
    let ser = HistorySerde { capacity: history.capacity(), routes: history.iter().cloned().collect() };
    let data = serde_json::to_vec_pretty(&ser).map_err(LocatorError::Encode)?;
    atomic_write(path, &data)?;
    tracing::info!(path = %path.display(), routes = history.len(), "history saved");
    Ok(())
}
