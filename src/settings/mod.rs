// src/settings/mod.rs
pub mod io;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Frame-rate cap applied through bevy_framepace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FpsSetting {
    Thirty,
    Sixty,
    ScreenHz, // Auto
}

impl Default for FpsSetting {
    fn default() -> Self {
        FpsSetting::Sixty
    }
}

fn default_page_size() -> u32 {
    10
}

/// User-tunable application settings, persisted as JSON in the config dir.
#[derive(Debug, Serialize, Deserialize, Clone, Resource)]
pub struct AppSettings {
    #[serde(default)]
    pub fps_setting: FpsSetting,
    /// Rows requested per page on every list screen.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            fps_setting: FpsSetting::default(),
            page_size: default_page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults_fill_missing_fields() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.fps_setting, FpsSetting::Sixty);
        assert_eq!(settings.page_size, 10);
    }
}
