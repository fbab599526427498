use rustc_hash::FxHashMap;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, TrackError};

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// Default bar colour of a signal track.
    pub const TRACK_BLUE: Rgb = Rgb(0, 0, 178);

    pub fn to_svg(self) -> String {
        format!("rgb({},{},{})", self.0, self.1, self.2)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::TRACK_BLUE
    }
}

/// Derive a stable, bright colour from a track name.
///
/// Three bytes of the SHA-256 digest are normalised by their sum and then
/// brightened so that the largest component is at most 1.5x its share.
pub fn name_color(name: &str) -> Rgb {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();

    let mut r = digest[24] as f32 / 255.0;
    let mut g = digest[8] as f32 / 255.0;
    let mut b = digest[16] as f32 / 255.0;

    let sum = r + g + b;
    if sum > 0.0 {
        r /= sum;
        g /= sum;
        b /= sum;
    }

    let max_component = r.max(g).max(b);
    let f = if max_component > 0.0 {
        1.5f32.min(1.0 / max_component)
    } else {
        1.0
    };

    let scale = |c: f32| (255.0 * (c * f).min(1.0)).round() as u8;
    Rgb(scale(r), scale(g), scale(b))
}

/// Colour for a track: an explicit entry in `custom` wins, then the
/// name-derived colour when `by_name` is set, then the default blue.
pub fn track_color(name: &str, custom: Option<&FxHashMap<String, Rgb>>, by_name: bool) -> Rgb {
    if let Some(&color) = custom.and_then(|c| c.get(name)) {
        return color;
    }
    if by_name {
        name_color(name)
    } else {
        Rgb::TRACK_BLUE
    }
}

/// Parse `#rrggbb` or `r,g,b`.
pub fn parse_color(s: &str) -> Result<Rgb> {
    let s = s.trim();
    let invalid = || TrackError::InvalidColor(s.to_string());

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        return Ok(Rgb(channel(0)?, channel(2)?, channel(4)?));
    }

    let parts: Vec<u8> = s
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| invalid())?;
    match parts.as_slice() {
        [r, g, b] => Ok(Rgb(*r, *g, *b)),
        _ => Err(invalid()),
    }
}

/// Read per-track colours from a `name<TAB>color` file.
pub fn load_track_colors(path: &Path) -> Result<FxHashMap<String, Rgb>> {
    let reader = BufReader::new(File::open(path)?);
    let mut colors = FxHashMap::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.splitn(2, '\t');
        if let (Some(name), Some(color)) = (parts.next(), parts.next()) {
            colors.insert(name.to_string(), parse_color(color)?);
        }
    }

    Ok(colors)
}
