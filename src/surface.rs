use crate::color::Rgb;

/// A pixel rectangle in surface coordinates, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rect { x, y, width, height }
    }

    /// Exclusive right edge; may lie past `i32::MAX`.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Overlap with `other`; `None` when the horizontal spans do not meet.
    /// Zero-height results are kept.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let x1 = self.right().min(other.right());
        if x1 <= x0 as i64 {
            return None;
        }
        let y0 = self.y.max(other.y);
        let y1 = self.bottom().min(other.bottom()).max(y0 as i64);
        Some(Rect::new(
            x0,
            y0,
            (x1 - x0 as i64) as u32,
            (y1 - y0 as i64) as u32,
        ))
    }
}

/// A filled-rectangle draw primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillRect {
    pub rect: Rect,
    pub color: Rgb,
}

/// Anything rectangles can be painted on.
pub trait DrawSurface {
    fn fill_rect(&mut self, fill: FillRect);
}

/// Records primitives instead of painting them.
impl DrawSurface for Vec<FillRect> {
    fn fill_rect(&mut self, fill: FillRect) {
        self.push(fill);
    }
}

/// Forwards only the part of each rectangle that falls inside `bounds`.
pub struct Clip<'a, S: ?Sized> {
    bounds: Rect,
    inner: &'a mut S,
}

impl<'a, S: DrawSurface + ?Sized> Clip<'a, S> {
    pub fn new(bounds: Rect, inner: &'a mut S) -> Self {
        Clip { bounds, inner }
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for Clip<'_, S> {
    fn fill_rect(&mut self, fill: FillRect) {
        if let Some(rect) = fill.rect.intersect(&self.bounds) {
            self.inner.fill_rect(FillRect { rect, ..fill });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_trims_to_bounds() {
        let mut out: Vec<FillRect> = Vec::new();
        let mut clip = Clip::new(Rect::new(10, 0, 10, 10), &mut out);
        for rect in [Rect::new(5, 5, 10, 10), Rect::new(0, 0, 5, 5), Rect::new(18, 4, 1, 0)] {
            clip.fill_rect(FillRect { rect, color: Rgb::BLACK });
        }
        let rects: Vec<Rect> = out.iter().map(|f| f.rect).collect();
        assert_eq!(rects, vec![Rect::new(10, 5, 5, 5), Rect::new(18, 4, 1, 0)]);
    }

    #[test]
    fn clip_handles_rects_spanning_the_whole_column_range() {
        let mut out: Vec<FillRect> = Vec::new();
        let mut clip = Clip::new(Rect::new(0, 0, 100, 10), &mut out);
        clip.fill_rect(FillRect {
            rect: Rect::new(i32::MIN, i32::MIN, u32::MAX, u32::MAX),
            color: Rgb::BLACK,
        });
        assert_eq!(out[0].rect, Rect::new(0, 0, 100, 10));
    }
}
