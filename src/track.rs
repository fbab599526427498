use crate::color::Rgb;
use crate::error::InvalidSeriesError;
use crate::render::{RenderTarget, SignalTrackRenderer};
use crate::surface::DrawSurface;

/// A named eigenvector track.
#[derive(Debug, Clone)]
pub struct SignalTrack {
    id: String,
    name: String,
    renderer: SignalTrackRenderer,
}

impl SignalTrack {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        SignalTrack {
            id: id.into(),
            name: name.into(),
            renderer: SignalTrackRenderer::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Rgb {
        self.renderer.color()
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.renderer.set_color(color);
    }

    pub fn set_data(&mut self, step: f64, values: Vec<f64>) -> Result<(), InvalidSeriesError> {
        self.renderer.set_data(step, values)
    }

    pub fn renderer(&self) -> &SignalTrackRenderer {
        &self.renderer
    }

    /// Genomic extent of the loaded data in bp, 0 when empty.
    pub fn extent(&self) -> f64 {
        self.renderer.series().map_or(0.0, |s| s.extent())
    }

    pub fn render<F, S>(&self, target: &RenderTarget<F>, surface: &mut S) -> usize
    where
        F: Fn(i64) -> i32,
        S: DrawSurface + ?Sized,
    {
        self.renderer.render(target, surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_follows_loaded_data() {
        let mut track = SignalTrack::new("chr1.pc1", "PC1");
        assert_eq!(track.extent(), 0.0);
        track.set_data(2500.0, vec![0.1, -0.2, 0.3]).unwrap();
        assert_eq!(track.extent(), 7500.0);
        assert_eq!((track.id(), track.name()), ("chr1.pc1", "PC1"));
        assert_eq!(track.color(), Rgb::TRACK_BLUE);
    }
}
