use clap::Parser;
use std::path::PathBuf;

use eigentrack::layout::LayoutOptions;
use eigentrack::GenomicRange;

#[derive(Parser)]
#[command(name = "eigentrack")]
#[command(about = "Draw eigenvector signal tracks as bars around their median.", long_about = None)]
pub struct Args {
    // MANDATORY OPTIONS
    /// Read signal values from this FILE, one per line. Repeat for more tracks.
    #[arg(short = 'i', long = "input", value_name = "FILE", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Write the picture to this FILE (PNG or SVG based on extension).
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: PathBuf,

    // Data Options
    /// Base pairs covered by each value.
    #[arg(short = 's', long = "step", value_name = "BP", default_value_t = 1.0)]
    pub step: f64,

    /// Genomic range to show: START-END in bp (default: the whole signal).
    #[arg(short = 'r', long = "range", value_name = "START-END")]
    pub range: Option<GenomicRange>,

    // Visualization Options
    /// Width in pixels of the plot area.
    #[arg(short = 'x', long = "width", value_name = "N", default_value_t = 1500)]
    pub width: u32,

    /// Height in pixels of each track.
    #[arg(short = 'y', long = "track-height", value_name = "N", default_value_t = 100)]
    pub track_height: u32,

    /// Draw a black line under each track.
    #[arg(short = 'b', long = "track-borders")]
    pub track_borders: bool,

    /// Color tracks by a hash of their names instead of the default blue.
    #[arg(short = 'C', long = "color-by-name")]
    pub color_by_name: bool,

    /// Read per-track colors (name<TAB>#rrggbb or name<TAB>r,g,b) from FILE.
    #[arg(short = 'F', long = "track-colors", value_name = "FILE")]
    pub track_colors: Option<PathBuf>,

    // Track Names Options
    /// Hide the track names on the left of the picture.
    #[arg(short = 'H', long = "hide-track-names")]
    pub hide_track_names: bool,

    /// Maximum number of characters to display for each track name.
    #[arg(short = 'c', long = "max-num-of-characters", value_name = "N")]
    pub max_num_of_characters: Option<usize>,

    // Threading
    /// Number of threads to use for loading inputs.
    #[arg(short = 't', long = "threads", value_name = "N")]
    pub threads: Option<usize>,

    // Logging
    /// Verbosity level (0 = error, 1 = info, 2 = debug).
    #[arg(short = 'v', long = "verbose", value_name = "N", default_value_t = 1)]
    pub verbose: u8,
}

impl Args {
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            width: self.width,
            track_height: self.track_height,
            range: self.range,
            show_names: !self.hide_track_names,
            max_name_chars: self.max_num_of_characters,
            borders: self.track_borders,
        }
    }

    pub fn is_svg(&self) -> bool {
        self.out
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("svg"))
            .unwrap_or(false)
    }
}
