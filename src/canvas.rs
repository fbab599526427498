use image::RgbImage;

use crate::color::Rgb;
use crate::font::{glyph, TRAILING_DOTS};
use crate::surface::{DrawSurface, FillRect};

/// An RGBA raster, initially white. Everything drawn is clipped to its bounds.
pub struct PixelCanvas {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        PixelCanvas {
            width,
            height,
            buffer: vec![255u8; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * self.width as usize + x as usize) * 4;
        Some(Rgb(self.buffer[idx], self.buffer[idx + 1], self.buffer[idx + 2]))
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = ((y as usize) * self.width as usize + x as usize) * 4;
        self.buffer[idx] = color.0;
        self.buffer[idx + 1] = color.1;
        self.buffer[idx + 2] = color.2;
        self.buffer[idx + 3] = 255;
    }

    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb) {
        for x in x0..x1 {
            self.put(x as i64, y as i64, color);
        }
    }

    /// Draw `text` with the 5x8 bitmap font, each glyph scaled to a
    /// `char_size` square. Text longer than `max_chars` ends in dots.
    pub fn text(&mut self, x: i32, y: i32, text: &str, char_size: u32, max_chars: usize, color: Rgb) {
        let count = text.chars().count();
        let shown = count.min(max_chars);
        let truncated = count > shown;
        for (i, c) in text.chars().take(shown).enumerate() {
            let data = if truncated && i == shown - 1 {
                &TRAILING_DOTS
            } else {
                glyph(c)
            };
            self.draw_glyph(x + (i as u32 * char_size) as i32, y, data, char_size, color);
        }
    }

    fn draw_glyph(&mut self, base_x: i32, base_y: i32, data: &[u8; 8], char_size: u32, color: Rgb) {
        let ratio = (char_size / 8).max(1) as i64;
        for (j, &row) in data.iter().enumerate() {
            let y = base_y as i64 + j as i64 * ratio;
            for z in (0..8i64).rev() {
                if (row >> z) & 1 == 1 {
                    let x = base_x as i64 + (7 - z) * ratio;
                    for rx in 0..ratio {
                        for ry in 0..ratio {
                            self.put(x + rx, y + ry, color);
                        }
                    }
                }
            }
        }
    }

    /// Drop the alpha channel.
    pub fn into_image(self) -> RgbImage {
        let rgb: Vec<u8> = self
            .buffer
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        RgbImage::from_raw(self.width, self.height, rgb)
            .unwrap_or_else(|| RgbImage::new(self.width, self.height))
    }
}

impl DrawSurface for PixelCanvas {
    fn fill_rect(&mut self, fill: FillRect) {
        let r = fill.rect;
        let x0 = r.x.max(0) as i64;
        let y0 = r.y.max(0) as i64;
        let x1 = r.right().min(self.width as i64);
        let y1 = r.bottom().min(self.height as i64);
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, fill.color);
            }
        }
    }
}
