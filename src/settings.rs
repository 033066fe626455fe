use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use doodle_rs::InputParameters;

/// Returns the path to the settings file: `~/.config/doodle-rs/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("doodle-rs");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// The last-entered generation parameters, serialized as JSON to the
/// platform config directory. Generated drawings themselves are never
/// persisted. Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Shape counts
    pub line_count: u32,
    pub circle_count: u32,
    pub rectangle_count: u32,
    pub triangle_count: u32,
    pub parabola_count: u32,
    pub trapezoid_count: u32,

    // Region
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,

    // Distribution
    pub density: f64,
    pub grid_step: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from_params(&InputParameters::default())
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Capture the current generation parameters for persistence.
    pub fn from_params(params: &InputParameters) -> Self {
        Self {
            line_count: params.line_count,
            circle_count: params.circle_count,
            rectangle_count: params.rectangle_count,
            triangle_count: params.triangle_count,
            parabola_count: params.parabola_count,
            trapezoid_count: params.trapezoid_count,

            min_x: params.min_x,
            max_x: params.max_x,
            min_y: params.min_y,
            max_y: params.max_y,

            density: params.density,
            grid_step: params.grid_step,
        }
    }

    /// Rebuild generation parameters from stored settings.
    ///
    /// The result is not validated here; the app re-validates before its
    /// first generation in case the file was edited by hand.
    pub fn to_params(&self) -> InputParameters {
        InputParameters {
            line_count: self.line_count,
            circle_count: self.circle_count,
            rectangle_count: self.rectangle_count,
            triangle_count: self.triangle_count,
            parabola_count: self.parabola_count,
            trapezoid_count: self.trapezoid_count,

            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,

            density: self.density,
            grid_step: self.grid_step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_survive_capture() {
        let params = InputParameters {
            line_count: 7,
            min_x: -100.0,
            max_x: 300.0,
            density: 0.4,
            ..Default::default()
        };
        assert_eq!(AppSettings::from_params(&params).to_params(), params);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"density": 0.5}"#).unwrap();
        assert_eq!(settings.density, 0.5);
        assert_eq!(settings.line_count, 5);
        assert_eq!(settings.grid_step, 25.0);
    }
}
