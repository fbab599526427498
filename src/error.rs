use std::path::PathBuf;

use thiserror::Error;

/// Reasons a signal series is refused by [`crate::SignalTrackRenderer::set_data`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidSeriesError {
    #[error("signal series is empty")]
    Empty,
    #[error("non-finite value {value} at index {index}")]
    NonFinite { index: usize, value: f64 },
    #[error("step must be positive and finite, got {0}")]
    InvalidStep(f64),
}

#[derive(Error, Debug)]
pub enum TrackError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{}:{line}: cannot parse value {token:?}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },
    #[error("{}: {source}", path.display())]
    InvalidSeries {
        path: PathBuf,
        #[source]
        source: InvalidSeriesError,
    },
    #[error("invalid genomic range: {0}")]
    InvalidRange(String),
    #[error("layout of {width}x{height} px does not fit in pixel coordinates")]
    LayoutTooLarge { width: u64, height: u64 },
    #[error("invalid color {0:?}")]
    InvalidColor(String),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, TrackError>;
