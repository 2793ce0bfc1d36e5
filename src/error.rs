//! Error types for the scoreboard library.
//!
//! Only configuration problems are errors. Odd score lengths, negative values and
//! unknown serving tags are display data and never fail.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid reference design size
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("design width must be a positive, finite number of pixels (got {0})")]
    InvalidDesignWidth(f64),

    #[error("design height must be a positive, finite number of pixels (got {0})")]
    InvalidDesignHeight(f64),
}

/// Errors while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),

    #[error("invalid design size in config")]
    Layout(#[from] LayoutError),

    #[error("terminal cell size must be non-zero (got {width}x{height} px)")]
    InvalidCellSize { width: u16, height: u16 },

    #[error("invalid time_format {0:?}")]
    InvalidTimeFormat(String),
}

/// Errors while loading a match-state snapshot from disk
#[derive(Error, Debug)]
pub enum StateFileError {
    #[error("failed to read state file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse state file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
