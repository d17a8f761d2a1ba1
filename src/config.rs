use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureConfig {
    #[serde(default = "FigureConfig::default_width")]
    pub width: u32,
    #[serde(default = "FigureConfig::default_height")]
    pub height: u32,
}

impl FigureConfig {
    fn default_width() -> u32 {
        2200
    }
    fn default_height() -> u32 {
        1000
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "StyleConfig::default_run_alpha")]
    pub run_alpha: f64,
    #[serde(default = "StyleConfig::default_band_alpha")]
    pub band_alpha: f64,
    #[serde(default = "StyleConfig::default_marker_size")]
    pub marker_size: u32,
}

impl StyleConfig {
    fn default_run_alpha() -> f64 {
        0.2
    }
    fn default_band_alpha() -> f64 {
        0.2
    }
    fn default_marker_size() -> u32 {
        5
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            run_alpha: Self::default_run_alpha(),
            band_alpha: Self::default_band_alpha(),
            marker_size: Self::default_marker_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlotConfig {
    #[serde(default)]
    pub figure: FigureConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

impl PlotConfig {
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write commented defaults and return them.
        let default_cfg = Self::default();
        if let Ok(text) = toml::to_string_pretty(&default_cfg) {
            let mut commented = String::new();
            for line in text.lines() {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    commented.push('\n');
                } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                    commented.push_str(line);
                    commented.push('\n');
                } else {
                    commented.push_str("# ");
                    commented.push_str(line);
                    commented.push('\n');
                }
            }
            if let Err(err) = fs::write(path_obj, commented) {
                eprintln!("Failed to write default config to {path}: {err}");
            }
        } else {
            eprintln!("Failed to serialize default config; continuing with defaults");
        }
        default_cfg
    }
}
