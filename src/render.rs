use log::debug;

use crate::color::Rgb;
use crate::error::InvalidSeriesError;
use crate::series::SignalSeries;
use crate::stats::SeriesStats;
use crate::surface::{DrawSurface, FillRect, Rect};

/// Where a track is drawn: its bounds plus the host's mapping from a
/// genomic position (bp) to a screen pixel column.
pub struct RenderTarget<F> {
    pub bounds: Rect,
    pub bp_to_pixel: F,
}

impl<F> RenderTarget<F>
where
    F: Fn(i64) -> i32,
{
    pub fn new(bounds: Rect, bp_to_pixel: F) -> Self {
        RenderTarget { bounds, bp_to_pixel }
    }
}

/// Draws a signal as bars above and below the midline of its target,
/// normalised around the series median.
#[derive(Debug, Clone, Default)]
pub struct SignalTrackRenderer {
    color: Rgb,
    loaded: Option<(SignalSeries, SeriesStats)>,
}

impl SignalTrackRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(color: Rgb) -> Self {
        SignalTrackRenderer { color, loaded: None }
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Install a new series, replacing the previous one and its statistics.
    /// On error the previous series is left untouched.
    pub fn set_data(&mut self, step: f64, values: Vec<f64>) -> Result<(), InvalidSeriesError> {
        let series = SignalSeries::new(step, values)?;
        self.set_series(series);
        Ok(())
    }

    pub fn set_series(&mut self, series: SignalSeries) {
        let stats = SeriesStats::compute(series.values());
        debug!(
            "Series of {} bins (step {} bp): median {:.4}, max |value| {:.4}",
            series.len(),
            series.step(),
            stats.median,
            stats.max_abs
        );
        self.loaded = Some((series, stats));
    }

    pub fn clear(&mut self) {
        self.loaded = None;
    }

    pub fn series(&self) -> Option<&SignalSeries> {
        self.loaded.as_ref().map(|(series, _)| series)
    }

    pub fn stats(&self) -> Option<SeriesStats> {
        self.loaded.as_ref().map(|(_, stats)| *stats)
    }

    /// Paint the loaded series into `target`, returning the number of
    /// rectangles issued. Does nothing when no series is loaded.
    ///
    /// Consecutive bins that land on the same pixel column are collapsed:
    /// a rectangle is only issued once the column advances, spanning from the
    /// previous column to the current one.
    pub fn render<F, S>(&self, target: &RenderTarget<F>, surface: &mut S) -> usize
    where
        F: Fn(i64) -> i32,
        S: DrawSurface + ?Sized,
    {
        let Some((series, stats)) = &self.loaded else {
            return 0;
        };

        let half = target.bounds.height / 2;
        let baseline = target.bounds.y as i64 + half as i64;
        let range = stats.amplitude_range();

        let mut drawn = 0;
        let mut last_x: Option<i32> = None;

        for (i, &value) in series.values().iter().enumerate() {
            let x = (target.bp_to_pixel)(series.position(i));

            if let Some(lx) = last_x.filter(|&lx| x > lx) {
                let deviation = value - stats.median;
                let bar = bar_height(deviation, range, half);
                let y = if deviation > 0.0 {
                    baseline - bar as i64
                } else {
                    baseline
                };
                // mapped columns may sit at the ends of the i32 range
                let width = (x as i64 - lx as i64) as u32;
                let y = y.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
                surface.fill_rect(FillRect {
                    rect: Rect::new(lx, y, width, bar),
                    color: self.color,
                });
                drawn += 1;
            }
            last_x = Some(x);
        }

        drawn
    }
}

/// Pixel height of a bar for `deviation` on a `range` scale, `half` pixels
/// being a full-scale bar. A flat signal (`range == 0`) gives 0. Values
/// further below the median than the range reach past `half`; painting
/// them is bounded by the surface.
pub fn bar_height(deviation: f64, range: f64, half: u32) -> u32 {
    if range <= 0.0 {
        return 0;
    }
    (deviation.abs() / range * half as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(pos: i64) -> i32 {
        pos as i32
    }

    #[test]
    fn renders_nothing_without_data() {
        let renderer = SignalTrackRenderer::new();
        let mut out: Vec<FillRect> = Vec::new();
        let target = RenderTarget::new(Rect::new(0, 0, 10, 100), identity);
        assert_eq!(renderer.render(&target, &mut out), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn failed_set_data_keeps_previous_series() {
        let mut renderer = SignalTrackRenderer::new();
        renderer.set_data(1.0, vec![1.0, 2.0, 3.0]).unwrap();
        assert!(renderer.set_data(1.0, vec![]).is_err());
        assert_eq!(renderer.series().map(|s| s.len()), Some(3));
    }

    #[test]
    fn clear_drops_the_series() {
        let mut renderer = SignalTrackRenderer::new();
        renderer.set_data(1.0, vec![1.0, 2.0]).unwrap();
        renderer.clear();
        assert!(renderer.stats().is_none());
    }

    #[test]
    fn bar_height_handles_flat_and_overflowing_signals() {
        assert_eq!(bar_height(3.0, 0.0, 50), 0);
        assert_eq!(bar_height(4.0, 4.0, 50), 50);
        assert_eq!(bar_height(-2.0, 4.0, 50), 25);
        assert_eq!(bar_height(-15.0, 5.0, 50), 150);
        assert_eq!(bar_height(1.0, 3.0, 10), 3);
    }

    #[test]
    fn bars_below_a_skewed_median_exceed_half_height() {
        let mut renderer = SignalTrackRenderer::new();
        renderer.set_data(1.0, vec![7.0, -10.0, 5.0, 6.0, 0.0]).unwrap();
        let mut out: Vec<FillRect> = Vec::new();
        renderer.render(&RenderTarget::new(Rect::new(0, 0, 10, 100), identity), &mut out);
        // median 5, max |v| 10, range 5: -10 deviates by 15 -> 3 * 50
        assert_eq!(out[0].rect, Rect::new(0, 50, 1, 150));
    }

    #[test]
    fn columns_at_the_ends_of_i32_do_not_overflow() {
        let mut renderer = SignalTrackRenderer::new();
        renderer.set_data(1.0, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut out: Vec<FillRect> = Vec::new();
        let target = RenderTarget::new(Rect::new(0, 0, 10, 100), |pos: i64| match pos {
            0 => i32::MIN,
            1 => 10,
            _ => i32::MAX,
        });
        assert_eq!(renderer.render(&target, &mut out), 2);
        assert_eq!((out[0].rect.x, out[0].rect.right()), (i32::MIN, 10));
        assert_eq!((out[1].rect.x, out[1].rect.right()), (10, i32::MAX as i64));
    }

    #[test]
    fn bars_are_offset_by_target_origin() {
        let mut renderer = SignalTrackRenderer::with_color(Rgb::BLACK);
        renderer.set_data(1.0, vec![0.0, 10.0]).unwrap();
        let mut out: Vec<FillRect> = Vec::new();
        let target = RenderTarget::new(Rect::new(0, 20, 10, 40), |pos| 5 + pos as i32);
        renderer.render(&target, &mut out);
        // median 5, range 5, half 20 -> bar of 20 going up from y = 40
        assert_eq!(
            out,
            vec![FillRect {
                rect: Rect::new(5, 20, 1, 20),
                color: Rgb::BLACK
            }]
        );
    }
}
