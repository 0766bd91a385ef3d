use std::{io, path::PathBuf};
use thiserror::Error;

use crate::dimension::Dimension;

pub type Result<T> = std::result::Result<T, BalanceError>;

#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("Invalid range for {dimension}: max ({max}) must be greater than min ({min})")]
    InvalidRange {
        dimension: Dimension,
        min: i32,
        max: i32,
    },

    #[error("Invalid band [{min}, {max}]: must satisfy {scale_min} <= min <= max <= {scale_max}")]
    InvalidBand {
        min: i32,
        max: i32,
        scale_min: i32,
        scale_max: i32,
    },

    #[error("Value {value} for {dimension} is outside the scale")]
    ValueOutOfScale { dimension: Dimension, value: i32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid CSV header: {0}")]
    CsvHeader(String),

    #[error("Invalid CSV row {row}: expected 4 columns, got {got}")]
    CsvRow { row: usize, got: usize },

    #[error("Invalid value at row {row}, column {dimension}: {value}")]
    ValueParse {
        row: usize,
        dimension: Dimension,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl From<toml::de::Error> for BalanceError {
    fn from(err: toml::de::Error) -> Self {
        BalanceError::Config(format!("TOML parse error: {}", err))
    }
}
