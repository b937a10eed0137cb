use log::{info, warn};
use std::fs;
use std::path::PathBuf;

/// Best score across sessions, backed by a plain-text file holding one
/// decimal integer. All I/O is best-effort: a missing or corrupt file
/// reads as 0 and a failed write is logged and swallowed, never surfaced
/// to the player.
pub struct HighScore {
    value: u32,
    path: PathBuf,
}

impl HighScore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let value = match fs::read_to_string(&path) {
            Ok(text) => match text.trim().parse::<u32>() {
                Ok(v) => v,
                Err(_) => {
                    warn!("ignoring corrupt high-score file {}", path.display());
                    0
                }
            },
            Err(_) => 0,
        };
        Self { value, path }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Record `score` if it beats the stored best. Returns true on a new
    /// record. The in-memory value is updated even if the write fails.
    pub fn update(&mut self, score: u32) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        match fs::write(&self.path, score.to_string()) {
            Ok(()) => info!("new high score {score} saved"),
            Err(err) => warn!("failed to save high score: {err}"),
        }
        true
    }
}
