// =============== Imports ================
use anyhow::{Context, Result};
use simplelog;
use std::fs::{self, File};
use std::path::PathBuf;

pub fn log_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().context("Could not determine the local data directory")?;
    Ok(data_dir.join("canito/debug.log"))
}

// ! Logs everything until the config is loaded, see apply_log_level
pub fn init_log() -> Result<()> {
    let log_file = log_path()?;
    let log_config = simplelog::ConfigBuilder::new()
        .set_time_offset_to_local()
        .unwrap_or_else(|builder| builder) // Keeps UTC if the local offset can't be determined
        .build();

    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent).context("Failed to create log directory")?;
    }
    let log_file_handle = File::create(&log_file)
        .with_context(|| format!("Failed to create log file: {}", log_file.display()))?;
    simplelog::WriteLogger::init(log::LevelFilter::Trace, log_config, log_file_handle)
        .context("Failed to initialize logger")?;

    Ok(())
}

pub fn apply_log_level(config: &crate::config::Config) -> Result<()> {
    let level = config.level_filter()?;
    log::set_max_level(level);
    log::debug!("Log level set to {}", level);
    Ok(())
}

pub fn describe(result: &crate::search::SearchResult) -> String {
    let mut text = result.name.clone();
    if let Some(artist) = &result.artist {
        text.push_str(&format!(" - {}", artist));
    }
    if let Some(album) = &result.album {
        text.push_str(&format!(" [{}]", album));
    }
    text
}
