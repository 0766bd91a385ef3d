use crate::{
    constants::{DEFAULT_OUTPUT_DIR, ENV_OUTPUT_DIR, SCALE_MAX, SCALE_MIN},
    dimension::{Band, Dimension, DimensionRange, PerDimension, Ranges},
    error::{BalanceError, Result},
    layout::Layout,
};
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub layout: Layout,
    pub dimensions: DimensionsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DimensionsConfig {
    pub control: DimensionConfig,
    pub accountability: DimensionConfig,
    pub influence: DimensionConfig,
    pub support: DimensionConfig,
}

impl DimensionsConfig {
    pub fn get(&self, dim: Dimension) -> &DimensionConfig {
        match dim {
            Dimension::Control => &self.control,
            Dimension::Accountability => &self.accountability,
            Dimension::Influence => &self.influence,
            Dimension::Support => &self.support,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct DimensionConfig {
    pub band_min: i32,
    pub band_max: i32,
    /// Shrink the slider itself to the band instead of only snapping reads
    pub lock_to_band: bool,
}

impl Default for DimensionConfig {
    fn default() -> Self {
        Self {
            band_min: SCALE_MIN,
            band_max: SCALE_MAX,
            lock_to_band: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load from a TOML file and validate
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BalanceError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            BalanceError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise defaults; then apply env overrides
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::load_from_file(p)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.ranges()?;
        Ok(())
    }

    /// `JOB_BALANCE_OUTPUT_DIR` takes precedence over the file
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(output_dir) = env::var(ENV_OUTPUT_DIR)
            && !output_dir.trim().is_empty()
        {
            let path = PathBuf::from(output_dir);

            // If the path already exists but is not a directory, reject early.
            if path.exists() && !path.is_dir() {
                return Err(BalanceError::Config(format!(
                    "Output path is not a directory: {}",
                    path.display()
                )));
            }
            self.output.dir = Some(path);
        }
        Ok(())
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Validated per-dimension slider ranges
    pub fn ranges(&self) -> Result<Ranges> {
        let mut ranges = PerDimension::<DimensionRange>::default();
        for dim in Dimension::all() {
            let dc = self.dimensions.get(dim);
            let band = Band::new(dc.band_min, dc.band_max)
                .map_err(|e| BalanceError::Config(format!("{dim}: {e}")))?;
            ranges[dim] = DimensionRange::new(dim, band, dc.lock_to_band)?;
        }
        Ok(ranges)
    }
}
