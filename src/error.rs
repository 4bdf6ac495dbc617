//! Error types
//!
//! `FeatureError` covers invalid input to the similarity measures.
//! `BatchError` covers everything the pair-file driver can fail on.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid input handed to one of the similarity measures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// The measure indexes the first character unconditionally.
    #[error("{metric} requires non-empty input strings")]
    EmptyInput { metric: &'static str },

    /// Both inputs were empty, so the average length is zero.
    #[error("{metric} is undefined when both input strings are empty")]
    ZeroAverageLength { metric: &'static str },
}

/// Errors that abort a batch run
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to open input {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("record on line {line}: {source}")]
    Feature {
        line: u64,
        #[source]
        source: FeatureError,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
