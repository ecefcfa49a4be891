//! Configuration system
//!
//! Layout settings can be kept in TOML or RON files and loaded through the
//! [`Config`] trait.

mod layout;

pub use layout::LayoutConfig;
pub use serde::{Serialize, Deserialize};

use std::path::Path;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::of(path)?;
        let contents = std::fs::read_to_string(path)?;

        let config = match format {
            ConfigFormat::Toml => Self::from_toml(&contents)?,
            ConfigFormat::Ron => Self::from_ron(&contents)?,
        };
        config.validate()?;

        log::debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Check value ranges after loading
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Save configuration to file
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::of(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Parse configuration from a TOML document
    fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse configuration from a RON document
    fn from_ron(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy)]
enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is outside its valid range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}
