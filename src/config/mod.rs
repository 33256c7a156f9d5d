//! Tuning configuration: balance constants loaded from a RON file.
//!
//! Looks at `$CHRONO_TUNING` first, then `tuning.ron` in the working
//! directory. A missing file means defaults. A file that fails to parse or
//! validate is reported and the defaults are used instead.

use bevy::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::*;

pub const TUNING_ENV_VAR: &str = "CHRONO_TUNING";
pub const DEFAULT_TUNING_FILE: &str = "tuning.ron";

/// Inserts `GameTuning` before any domain plugin reads it.
/// Add after `LogPlugin` so load problems are visible.
#[derive(Default)]
pub struct ConfigPlugin {
    /// Overrides the env var / default file lookup.
    pub path: Option<PathBuf>,
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let path = self.path.clone().unwrap_or_else(tuning_path);
        app.insert_resource(load_tuning(&path));
    }
}

pub fn tuning_path() -> PathBuf {
    std::env::var_os(TUNING_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TUNING_FILE))
}

pub fn parse_tuning(text: &str) -> Result<GameTuning, String> {
    let tuning: GameTuning =
        ron::from_str(text).map_err(|e| format!("Deserialization failed: {}", e))?;
    validate_tuning(&tuning)?;
    Ok(tuning)
}

pub fn read_tuning(path: &Path) -> Result<GameTuning, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    parse_tuning(&text)
}

pub fn tuning_to_ron(tuning: &GameTuning) -> Result<String, String> {
    ron::ser::to_string_pretty(tuning, ron::ser::PrettyConfig::default())
        .map_err(|e| format!("Serialization failed: {}", e))
}

/// Rejects values the growth timer and notices cannot work with.
pub fn validate_tuning(tuning: &GameTuning) -> Result<(), String> {
    if tuning.stage_count == 0 {
        return Err("stage_count must be at least 1".to_string());
    }
    let rate = tuning.growth_rate_per_second;
    if !rate.is_finite() || rate < 0.0 {
        return Err(format!("growth_rate_per_second must be finite and >= 0, got {}", rate));
    }
    for (name, secs) in [
        ("loading_secs", tuning.loading_secs),
        ("controls_reminder_secs", tuning.controls_reminder_secs),
        ("sell_result_secs", tuning.sell_result_secs),
    ] {
        if !secs.is_finite() || secs < 0.0 {
            return Err(format!("{} must be finite and >= 0, got {}", name, secs));
        }
    }
    Ok(())
}

/// Loads tuning from `path`, falling back to defaults.
pub fn load_tuning(path: &Path) -> GameTuning {
    if !path.exists() {
        info!("[Config] No tuning file at {}; using defaults.", path.display());
        return GameTuning::default();
    }
    match read_tuning(path) {
        Ok(tuning) => {
            info!("[Config] Loaded tuning from {}.", path.display());
            tuning
        }
        Err(e) => {
            warn!("[Config] Ignoring {}: {}. Using defaults.", path.display(), e);
            GameTuning::default()
        }
    }
}
