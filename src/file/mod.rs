pub mod config;
pub mod palette;

pub use config::{
    load_config, ConfigError, ConfigPlugin, ConfigSource, InputBackendKind, KeyEntry,
    LoadedConfig, OverlayConfig, OverlaySettings,
};
pub use palette::Palette;
