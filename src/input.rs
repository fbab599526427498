use log::{debug, info};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Result, TrackError};
use crate::track::SignalTrack;

/// Read one value per line. Blank lines and `#` comments are skipped; when a
/// line holds several whitespace-separated columns the last one is the value.
pub fn load_values(path: &Path) -> Result<Vec<f64>> {
    let reader = BufReader::new(File::open(path)?);
    let mut values = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let token = line.split_whitespace().last().unwrap_or(line);
        let value = token.parse::<f64>().map_err(|_| TrackError::Parse {
            path: path.to_path_buf(),
            line: line_no + 1,
            token: token.to_string(),
        })?;
        values.push(value);
    }

    debug!("Read {} values from {:?}", values.len(), path);
    Ok(values)
}

/// Build one track per input file, named after the file stem. Files are
/// read in parallel; the first failure aborts the whole load.
pub fn load_tracks(paths: &[PathBuf], step: f64) -> Result<Vec<SignalTrack>> {
    info!("Loading {} signal file(s)...", paths.len());

    paths
        .par_iter()
        .map(|path| -> Result<SignalTrack> {
            let values = load_values(path)?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let mut track = SignalTrack::new(path.display().to_string(), name);
            track
                .set_data(step, values)
                .map_err(|source| TrackError::InvalidSeries {
                    path: path.clone(),
                    source,
                })?;
            Ok(track)
        })
        .collect()
}
