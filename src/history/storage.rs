use super::types::HistoryState;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Default history file path (~/.local/share/peakform/history.json).
pub fn get_history_path() -> PathBuf {
    crate::config::get_data_dir().join("history.json")
}

/// Load history from a JSON file.
///
/// A missing file is a fresh install and yields an empty state. A file
/// with an unsupported version is an error.
pub fn load_history(path: &Path) -> Result<HistoryState> {
    if !path.exists() {
        return Ok(HistoryState::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open history file at {}", path.display()))?;

    let state: HistoryState = serde_json::from_reader(file).context("Failed to load history")?;

    if state.version != 1 {
        anyhow::bail!("Unsupported history version: {}", state.version);
    }

    Ok(state)
}

/// Save history to a JSON file atomically, so a crash mid-write never
/// leaves a corrupted store behind. Creates the data directory if needed.
pub fn save_history(path: &Path, state: &HistoryState) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, state).context("Failed to serialize history")?;

    file.commit().context("Failed to save history")?;

    Ok(())
}
