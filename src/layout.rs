use image::RgbImage;
use log::{debug, info};

use crate::canvas::PixelCanvas;
use crate::color::Rgb;
use crate::error::{Result, TrackError};
use crate::frame::{GenomicFrame, GenomicRange};
use crate::render::RenderTarget;
use crate::surface::{Clip, DrawSurface, Rect};
use crate::svg::SvgCanvas;
use crate::track::SignalTrack;

const LABEL_PADDING: u32 = 6;

/// How tracks are stacked into one picture.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Width in pixels of the plot area, excluding the name column.
    pub width: u32,
    pub track_height: u32,
    /// Visible genomic range; defaults to the extent of the longest track.
    pub range: Option<GenomicRange>,
    pub show_names: bool,
    /// Cap on label length; longer names are truncated with dots.
    pub max_name_chars: Option<usize>,
    pub borders: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            width: 1500,
            track_height: 100,
            range: None,
            show_names: true,
            max_name_chars: None,
            borders: false,
        }
    }
}

/// Resolved geometry for a set of tracks.
#[derive(Debug, Clone)]
pub struct Layout {
    pub frame: GenomicFrame,
    pub names_width: u32,
    pub char_size: u32,
    pub max_chars: usize,
    pub track_height: u32,
    pub total_width: u32,
    pub total_height: u32,
    pub borders: bool,
}

impl Layout {
    pub fn new(tracks: &[SignalTrack], opts: &LayoutOptions) -> Result<Self> {
        let range = match opts.range {
            Some(range) => range,
            None => {
                let extent = tracks.iter().map(|t| t.extent()).fold(0.0f64, f64::max);
                if extent <= 0.0 {
                    return Err(TrackError::InvalidRange("no data to derive a range from".into()));
                }
                GenomicRange { start: 0.0, end: extent.ceil() }
            }
        };
        let frame = GenomicFrame::new(range, opts.width)?;

        let char_size = ((opts.track_height / 3) / 8 * 8).clamp(8, 32);
        let longest = tracks.iter().map(|t| t.name().chars().count()).max().unwrap_or(0);
        let max_chars = opts.max_name_chars.map_or(longest, |cap| cap.min(longest));
        let names_width = if opts.show_names && max_chars > 0 {
            max_chars as u32 * char_size + LABEL_PADDING
        } else {
            0
        };

        let total_width = names_width as u64 + opts.width as u64;
        let total_height = tracks.len() as u64 * opts.track_height as u64;
        if total_width > i32::MAX as u64 || total_height > i32::MAX as u64 {
            return Err(TrackError::LayoutTooLarge {
                width: total_width,
                height: total_height,
            });
        }

        debug!(
            "Layout: {} bp/px, name column {} px, {} track(s) of {} px",
            frame.bp_per_pixel(),
            names_width,
            tracks.len(),
            opts.track_height
        );

        Ok(Layout {
            frame,
            names_width,
            char_size,
            max_chars,
            track_height: opts.track_height,
            total_width: total_width as u32,
            total_height: total_height as u32,
            borders: opts.borders,
        })
    }

    /// Top edge of row `index`. `Layout::new` keeps every row of the
    /// layout within `i32`; rows past the end are clamped.
    fn row_top(&self, index: usize) -> i64 {
        (index as i64)
            .saturating_mul(self.track_height as i64)
            .min(i32::MAX as i64)
    }

    /// Plot-area bounds of the `index`-th track.
    pub fn track_bounds(&self, index: usize) -> Rect {
        Rect::new(
            self.names_width as i32,
            self.row_top(index) as i32,
            self.frame.width(),
            self.track_height,
        )
    }

    fn label_origin(&self, index: usize) -> (i32, i32) {
        let y = self.row_top(index) + (self.track_height.saturating_sub(self.char_size) / 2) as i64;
        ((LABEL_PADDING / 2) as i32, y as i32)
    }

    fn border_y(&self, index: usize) -> i32 {
        (self.row_top(index) + self.track_height as i64 - 1) as i32
    }
}

/// Render every track into its row of `surface`, clipped to the plot area.
pub fn plot_tracks<S>(tracks: &[SignalTrack], layout: &Layout, surface: &mut S) -> usize
where
    S: DrawSurface + ?Sized,
{
    let names_width = layout.names_width as i32;
    let frame = layout.frame;
    let mut drawn = 0;

    for (i, track) in tracks.iter().enumerate() {
        let bounds = layout.track_bounds(i);
        let target = RenderTarget::new(bounds, move |pos| {
            frame.bp_to_screen_pixel(pos).saturating_add(names_width)
        });
        let mut clip = Clip::new(bounds, &mut *surface);
        let n = track.render(&target, &mut clip);
        debug!("Track {:?}: {} bars", track.name(), n);
        drawn += n;
    }

    drawn
}

pub fn render_png(tracks: &[SignalTrack], layout: &Layout) -> RgbImage {
    let mut canvas = PixelCanvas::new(layout.total_width, layout.total_height);

    let drawn = plot_tracks(tracks, layout, &mut canvas);
    info!("Drew {} bars", drawn);

    for (i, track) in tracks.iter().enumerate() {
        if layout.names_width > 0 {
            let (x, y) = layout.label_origin(i);
            canvas.text(x, y, track.name(), layout.char_size, layout.max_chars, Rgb::BLACK);
        }
        if layout.borders {
            canvas.hline(0, layout.total_width as i32, layout.border_y(i), Rgb::BLACK);
        }
    }

    canvas.into_image()
}

pub fn render_svg(tracks: &[SignalTrack], layout: &Layout) -> String {
    let mut svg = SvgCanvas::new(layout.total_width, layout.total_height, layout.char_size as f64);

    let drawn = plot_tracks(tracks, layout, &mut svg);
    info!("Drew {} bars", drawn);

    for (i, track) in tracks.iter().enumerate() {
        if layout.names_width > 0 {
            let (x, y) = layout.label_origin(i);
            let label: String = track.name().chars().take(layout.max_chars).collect();
            svg.text(x, y, &label, Rgb::BLACK);
        }
        if layout.borders {
            svg.hline(0, layout.total_width as i32, layout.border_y(i), Rgb::BLACK);
        }
    }

    svg.finish()
}
