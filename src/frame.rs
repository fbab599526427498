use std::str::FromStr;

use crate::error::TrackError;

/// A half-open base-pair interval, parsed from `start-end`
/// (thousands separators allowed, e.g. `1,000,000-2,500,000`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenomicRange {
    pub start: f64,
    pub end: f64,
}

impl FromStr for GenomicRange {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TrackError::InvalidRange(s.to_string());
        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let parse = |v: &str| -> Result<f64, TrackError> {
            let cleaned: String = v.trim().chars().filter(|&c| c != ',').collect();
            cleaned.parse::<u64>().map(|n| n as f64).map_err(|_| invalid())
        };
        let range = GenomicRange {
            start: parse(start)?,
            end: parse(end)?,
        };
        if range.end <= range.start {
            return Err(invalid());
        }
        Ok(range)
    }
}

/// Maps genomic positions onto the pixel columns of a plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenomicFrame {
    origin: f64,
    bp_per_pixel: f64,
    width: u32,
}

impl GenomicFrame {
    pub fn new(range: GenomicRange, width: u32) -> Result<Self, TrackError> {
        let span = range.end - range.start;
        if width == 0 || !(span.is_finite() && span > 0.0) {
            return Err(TrackError::InvalidRange(format!(
                "{}-{} over {} px",
                range.start, range.end, width
            )));
        }
        Ok(GenomicFrame {
            origin: range.start,
            bp_per_pixel: span / width as f64,
            width,
        })
    }

    pub fn bp_per_pixel(&self) -> f64 {
        self.bp_per_pixel
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Column of `pos` relative to the left edge of the plot area.
    /// Positions left of the origin give negative columns.
    pub fn bp_to_screen_pixel(&self, pos: i64) -> i32 {
        ((pos as f64 - self.origin) / self.bp_per_pixel).floor() as i32
    }
}
