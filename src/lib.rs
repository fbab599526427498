//! Eigenvector track rendering: a per-bin signal drawn as bars above and
//! below the midline of a track, normalised around the series median.

pub mod canvas;
pub mod color;
pub mod error;
pub mod font;
pub mod frame;
pub mod input;
pub mod layout;
pub mod render;
pub mod series;
pub mod stats;
pub mod surface;
pub mod svg;
pub mod track;

pub use color::Rgb;
pub use error::{InvalidSeriesError, TrackError};
pub use frame::{GenomicFrame, GenomicRange};
pub use render::{RenderTarget, SignalTrackRenderer};
pub use series::SignalSeries;
pub use stats::SeriesStats;
pub use surface::{DrawSurface, FillRect, Rect};
pub use track::SignalTrack;
