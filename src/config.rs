use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, path::Path, str::FromStr};
use thiserror::Error;

/// Dimensions of a [`Grid`][crate::geometry::Grid], as loaded from a TOML document.
///
/// ```toml
/// width = 12
/// height = 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl GridConfig {
    /// Check that both dimensions are positive and fit in an `i32`.
    pub fn validate(&self) -> Result<(), Error> {
        let fits = |dimension: usize| dimension > 0 && i32::try_from(dimension).is_ok();
        if fits(self.width) && fits(self.height) {
            Ok(())
        } else {
            Err(Error::Dimensions {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = toml::to_string_pretty(self)?;
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        log::debug!("loading grid configuration from {}", path.display());
        let data = std::fs::read_to_string(path)?;
        data.parse()
    }
}

impl FromStr for GridConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: GridConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
    #[error("grid dimensions must be positive and fit in an i32; got {width}x{height}")]
    Dimensions { width: usize, height: usize },
}
