use serde::Deserialize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::domain::BoundaryPoint;

const CONFIG_NAME: &str = "scc-boundary";

fn default_zoom() -> u8 {
    17
}
// Seoul City Hall
fn default_center_lat() -> f64 {
    37.5665
}
fn default_center_lng() -> f64 {
    126.978
}
fn default_verbose() -> bool {
    false
}

/// Top-level file configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct FileConfig {
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub style: OverlayStyle,
    #[serde(default)]
    pub messages: Messages,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EditorConfig {
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,
}

impl EditorConfig {
    pub fn center(&self) -> BoundaryPoint {
        BoundaryPoint::new(self.center_lat, self.center_lng)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
        }
    }
}

fn default_stroke_color() -> String {
    "#FF0000".to_string()
}
fn default_stroke_weight() -> u32 {
    2
}
fn default_stroke_opacity() -> f32 {
    0.8
}
fn default_fill_color() -> String {
    "#FF0000".to_string()
}
fn default_fill_opacity() -> f32 {
    0.2
}

/// Stroke and fill used for the in-progress line and the boundary polygon
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OverlayStyle {
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    #[serde(default = "default_stroke_weight")]
    pub stroke_weight: u32,
    #[serde(default = "default_stroke_opacity")]
    pub stroke_opacity: f32,
    #[serde(default = "default_fill_color")]
    pub fill_color: String,
    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            stroke_weight: default_stroke_weight(),
            stroke_opacity: default_stroke_opacity(),
            fill_color: default_fill_color(),
            fill_opacity: default_fill_opacity(),
        }
    }
}

fn default_confirm_restart() -> String {
    "Start drawing again? The current boundary will be discarded.".to_string()
}
fn default_confirm_clear() -> String {
    "Remove every point of the current boundary?".to_string()
}
fn default_too_few_points() -> String {
    "A boundary needs at least 3 points.".to_string()
}
fn default_invalid_boundary() -> String {
    "The saved boundary could not be read. Starting with an empty boundary.".to_string()
}

/// User-facing texts shown by the editor
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Messages {
    #[serde(default = "default_confirm_restart")]
    pub confirm_restart: String,
    #[serde(default = "default_confirm_clear")]
    pub confirm_clear: String,
    #[serde(default = "default_too_few_points")]
    pub too_few_points: String,
    #[serde(default = "default_invalid_boundary")]
    pub invalid_boundary: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            confirm_restart: default_confirm_restart(),
            confirm_clear: default_confirm_clear(),
            too_few_points: default_too_few_points(),
            invalid_boundary: default_invalid_boundary(),
        }
    }
}

impl FileConfig {
    /// Load from the first config file found in the search paths
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "loaded config");
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to parse config file");
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from(format!("{CONFIG_NAME}.toml")));
    paths.push(PathBuf::from(format!(".{CONFIG_NAME}.toml")));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(CONFIG_NAME).join("config.toml"));
        paths.push(config_dir.join(format!("{CONFIG_NAME}.toml")));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{CONFIG_NAME}.toml")));
    }

    paths
}
