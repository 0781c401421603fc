use crate::model::ShapeDefaults;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML settings: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("could not encode settings as TOML: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Volume samples at or below this level reset the trend window.
    pub volume_floor: f32,
    /// Levels below this count as "decrease", the rest as "increase".
    pub volume_threshold: f32,
    pub move_step: f32,
    pub rotate_step: f32,
    /// Applied to keyboard steps while ctrl/cmd is held.
    pub fast_multiplier: f32,
    pub volume_move_step: f32,
    pub volume_rotate_step: f32,
    pub duplicate_offset: f32,
    pub default_radius_x: f32,
    pub default_radius_y: f32,
    pub rotate_guide_length: f32,
    pub volume_tick_ms: u64,
    pub show_numbers: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            volume_floor: 2.0,
            volume_threshold: 10.0,
            move_step: 5.0,
            rotate_step: 2.0,
            fast_multiplier: 5.0,
            volume_move_step: 5.0,
            volume_rotate_step: 2.0,
            duplicate_offset: 15.0,
            default_radius_x: 100.0,
            default_radius_y: 50.0,
            rotate_guide_length: 10.0,
            volume_tick_ms: 50,
            show_numbers: true,
        }
    }
}

impl EditorSettings {
    pub fn shape_defaults(&self) -> ShapeDefaults {
        ShapeDefaults {
            radius_x: self.default_radius_x,
            radius_y: self.default_radius_y,
            duplicate_offset: self.duplicate_offset,
        }
    }
}

pub fn config_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config").join("daen.toml");
        if path.exists() {
            return path;
        }
    }
    PathBuf::from("settings.toml")
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

pub fn parse_settings(text: &str, prefer_toml: bool) -> Result<EditorSettings, SettingsError> {
    if prefer_toml {
        toml::from_str::<EditorSettings>(text).or_else(|toml_err| {
            serde_json::from_str::<EditorSettings>(text).map_err(|_| toml_err.into())
        })
    } else {
        serde_json::from_str::<EditorSettings>(text).or_else(|json_err| {
            toml::from_str::<EditorSettings>(text).map_err(|_| json_err.into())
        })
    }
}

pub fn load_settings(path: &Path) -> Result<EditorSettings, SettingsError> {
    let text = std::fs::read_to_string(path)?;
    parse_settings(&text, is_toml(path))
}

/// Loads `path`, falling back to defaults when it is missing or malformed.
pub fn load_or_default(path: &Path) -> EditorSettings {
    if !path.exists() {
        log::info!("no settings at {}, using defaults", path.display());
        return EditorSettings::default();
    }
    match load_settings(path) {
        Ok(settings) => {
            log::info!("settings loaded from {}", path.display());
            settings
        }
        Err(e) => {
            log::warn!("ignoring settings at {}: {e}", path.display());
            EditorSettings::default()
        }
    }
}

pub fn save_settings(path: &Path, settings: &EditorSettings) -> Result<(), SettingsError> {
    let text = if is_toml(path) {
        toml::to_string_pretty(settings)?
    } else {
        serde_json::to_string_pretty(settings)?
    };
    std::fs::write(path, text)?;
    log::info!("settings saved to {}", path.display());
    Ok(())
}
