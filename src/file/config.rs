use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::engine::{OverlayLayout, ScrollDirection};
use crate::file::palette::Palette;

/// Looked up in the working directory when no path is given on the command line.
pub const CONFIG_FILE_NAME: &str = "keyoverlay.yaml";
const CONFIG_DIR_NAME: &str = "keyoverlay";
const USER_CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write default config file at '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Could not find a config directory for this platform")]
    NoConfigDir,

    #[error("Window dimensions must be non-zero, got {width}x{height}")]
    InvalidWindow { width: u16, height: u16 },

    #[error("Bar speed must be a positive number, got {0}")]
    InvalidBarSpeed(f32),

    #[error("Key size must be non-zero")]
    InvalidKeySize,
}

/// Raw contents of the config file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OverlayConfig {
    pub window: WindowConfig,
    /// Pixels per second.
    pub bar_speed: f32,
    pub key_size: u32,
    #[serde(default = "default_outline_thickness")]
    pub outline_thickness: u32,
    #[serde(default = "default_margin")]
    pub margin: u32,
    #[serde(default)]
    pub scroll: ScrollDirection,
    #[serde(default = "default_true")]
    pub fading: bool,
    #[serde(default = "default_true")]
    pub key_counter: bool,
    /// 0 leaves the frame rate uncapped.
    #[serde(default = "default_max_fps")]
    pub max_fps: u32,
    /// Path relative to the `assets` directory.
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub input_backend: InputBackendKind,
    #[serde(default)]
    pub colors: Palette,
    pub keys: Vec<KeyEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WindowConfig {
    pub width: u16,
    pub height: u16,
    #[serde(default)]
    pub always_on_top: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyEntry {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Where key state is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputBackendKind {
    /// Bevy's window input; only sees keys while the overlay has focus.
    #[default]
    Window,
    /// Device-level key state, independent of focus.
    Global,
}

fn default_outline_thickness() -> u32 {
    5
}

fn default_margin() -> u32 {
    25
}

fn default_max_fps() -> u32 {
    165
}

fn default_true() -> bool {
    true
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                width: 280,
                height: 960,
                always_on_top: false,
            },
            bar_speed: 600.0,
            key_size: 70,
            outline_thickness: default_outline_thickness(),
            margin: default_margin(),
            scroll: ScrollDirection::Down,
            fading: true,
            key_counter: true,
            max_fps: default_max_fps(),
            background_image: None,
            input_backend: InputBackendKind::Window,
            colors: Palette::default(),
            keys: vec![
                KeyEntry { key: "Z".to_string(), label: None },
                KeyEntry { key: "X".to_string(), label: None },
            ],
        }
    }
}

/// Validated, immutable settings every system reads from.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OverlaySettings {
    pub window_width: u16,
    pub window_height: u16,
    pub always_on_top: bool,
    pub layout: OverlayLayout,
    pub bar_speed: f32,
    pub palette: Palette,
    pub fading: bool,
    pub key_counter: bool,
    pub max_fps: u32,
    pub background_image: Option<String>,
    pub input_backend: InputBackendKind,
    pub keys: Vec<KeyEntry>,
}

impl OverlaySettings {
    pub fn window_size(&self) -> Vec2 {
        self.layout.window
    }
}

impl OverlayConfig {
    pub fn validate(self) -> Result<OverlaySettings, ConfigError> {
        let WindowConfig {
            width,
            height,
            always_on_top,
        } = self.window;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidWindow { width, height });
        }
        if !(self.bar_speed.is_finite() && self.bar_speed > 0.0) {
            return Err(ConfigError::InvalidBarSpeed(self.bar_speed));
        }
        if self.key_size == 0 {
            return Err(ConfigError::InvalidKeySize);
        }

        let layout = OverlayLayout {
            window: Vec2::new(f32::from(width), f32::from(height)),
            key_size: self.key_size as f32,
            outline: self.outline_thickness as f32,
            margin: self.margin as f32,
            scroll: self.scroll,
        };

        Ok(OverlaySettings {
            window_width: width,
            window_height: height,
            always_on_top,
            layout,
            bar_speed: self.bar_speed,
            palette: self.colors,
            fading: self.fading,
            key_counter: self.key_counter,
            max_fps: self.max_fps,
            background_image: self.background_image.filter(|path| !path.trim().is_empty()),
            input_backend: self.input_backend,
            keys: self.keys,
        })
    }
}

/// Where the active config came from, logged once the app is up.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub created: bool,
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: OverlayConfig,
    pub source: ConfigSource,
}

/// Load the config from `cli_path`, or from `keyoverlay.yaml` in the working
/// directory, or from the user config directory. Only the last location gets a
/// default file written when missing.
pub fn load_config(cli_path: Option<PathBuf>) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = cli_path {
        let config = read_config(&path)?;
        return Ok(LoadedConfig {
            config,
            source: ConfigSource { path, created: false },
        });
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        let config = read_config(&local)?;
        return Ok(LoadedConfig {
            config,
            source: ConfigSource { path: local, created: false },
        });
    }

    let mut path = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    path.push(CONFIG_DIR_NAME);
    path.push(USER_CONFIG_FILE_NAME);
    load_or_create_config(path)
}

pub fn load_or_create_config(path: PathBuf) -> Result<LoadedConfig, ConfigError> {
    if path.exists() {
        let config = read_config(&path)?;
        return Ok(LoadedConfig {
            config,
            source: ConfigSource { path, created: false },
        });
    }

    let config = OverlayConfig::default();
    let yaml = serde_yaml::to_string(&config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
    }
    fs::write(&path, yaml).map_err(|source| ConfigError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(LoadedConfig {
        config,
        source: ConfigSource { path, created: true },
    })
}

pub fn read_config(path: &Path) -> Result<OverlayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&content)?)
}

pub struct ConfigPlugin {
    pub settings: OverlaySettings,
    pub source: ConfigSource,
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone())
            .insert_resource(self.source.clone())
            .add_systems(Startup, log_config_source);
    }
}

fn log_config_source(source: Res<ConfigSource>, settings: Res<OverlaySettings>) {
    if source.created {
        warn!(
            "Config file not found, wrote defaults to '{}'",
            source.path.display()
        );
    }
    info!(
        "Loaded config from '{}': {}x{} window, {} keys, {:?} scroll",
        source.path.display(),
        settings.window_width,
        settings.window_height,
        settings.keys.len(),
        settings.layout.scroll,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = "
window:
  width: 300
  height: 480
bar_speed: 450.0
key_size: 60
keys:
  - key: Z
  - key: mLeft
    label: LMB
";

    #[test]
    fn missing_optional_fields_take_defaults() {
        let config: OverlayConfig = serde_yaml::from_str(MINIMAL).unwrap();
        assert_eq!(config.outline_thickness, 5);
        assert_eq!(config.max_fps, 165);
        assert_eq!(config.scroll, ScrollDirection::Down);
        assert_eq!(config.input_backend, InputBackendKind::Window);
        assert!(config.fading && config.key_counter);
        assert_eq!(config.keys[1].label.as_deref(), Some("LMB"));
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let yaml = MINIMAL.replace("bar_speed: 450.0\n", "");
        let err = serde_yaml::from_str::<OverlayConfig>(&yaml).unwrap_err();
        assert!(err.to_string().contains("bar_speed"));
    }

    #[test]
    fn validation_builds_layout() {
        let config: OverlayConfig = serde_yaml::from_str(MINIMAL).unwrap();
        let settings = config.validate().unwrap();
        assert_eq!(settings.window_size(), Vec2::new(300.0, 480.0));
        assert_eq!(settings.layout.ratio_y(), 0.5);
        assert_eq!(settings.layout.key_size, 60.0);
    }

    #[test]
    fn zero_sized_window_is_fatal() {
        let mut config = OverlayConfig::default();
        config.window.height = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWindow { width: 280, height: 0 })
        ));
    }

    #[test]
    fn non_positive_bar_speed_is_fatal() {
        for speed in [0.0, -1.0, f32::NAN] {
            let config = OverlayConfig {
                bar_speed: speed,
                ..OverlayConfig::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidBarSpeed(_))));
        }
    }

    #[test]
    fn blank_background_image_is_dropped() {
        let config = OverlayConfig {
            background_image: Some("  ".to_string()),
            ..OverlayConfig::default()
        };
        assert_eq!(config.validate().unwrap().background_image, None);
    }

    #[test]
    fn explicit_path_is_read_as_is() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let loaded = load_config(Some(file.path().to_path_buf())).unwrap();
        assert!(!loaded.source.created);
        assert_eq!(loaded.config.keys.len(), 2);
    }

    #[test]
    fn missing_explicit_path_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn default_file_is_written_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let loaded = load_or_create_config(path.clone()).unwrap();
        assert!(loaded.source.created);
        assert_eq!(loaded.config, OverlayConfig::default());

        let reread = read_config(&path).unwrap();
        assert_eq!(reread, OverlayConfig::default());
    }
}
