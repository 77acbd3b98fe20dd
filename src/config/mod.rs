use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the data directory path (~/.local/share/peakform/)
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| {
            let home = dirs::home_dir().expect("Could not determine home directory");
            home.join(".local").join("share")
        })
        .join("peakform")
}

/// Ensure the data directory exists
pub fn ensure_data_dir() -> Result<()> {
    let data_dir = get_data_dir();
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).with_context(|| {
            format!("Failed to create data directory at {}", data_dir.display())
        })?;
    }
    Ok(())
}
