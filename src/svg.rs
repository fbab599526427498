use std::fmt::Write;

use crate::color::Rgb;
use crate::surface::{DrawSurface, FillRect};

/// Builds an SVG document from draw calls.
pub struct SvgCanvas {
    width: u32,
    height: u32,
    font_size: f64,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32, font_size: f64) -> Self {
        SvgCanvas {
            width,
            height,
            font_size,
            body: String::new(),
        }
    }

    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{}" y1="{}.5" x2="{}" y2="{}.5" stroke="{}" stroke-width="1"/>"#,
            x0,
            y,
            x1,
            y,
            color.to_svg()
        );
    }

    /// `y` is the top of the text line.
    pub fn text(&mut self, x: i32, y: i32, text: &str, color: Rgb) {
        let _ = writeln!(
            self.body,
            r#"<text x="{}" y="{}" class="track-name" fill="{}">{}</text>"#,
            x,
            y as f64 + self.font_size,
            color.to_svg(),
            escape_xml(text)
        );
    }

    pub fn finish(self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<style>
  .track-name {{ font-family: 'DejaVu Sans Mono', 'Courier New', monospace; font-size: {fs}px; }}
</style>
<rect width="100%" height="100%" fill="white"/>
{body}</svg>
"#,
            w = self.width,
            h = self.height,
            fs = self.font_size,
            body = self.body
        )
    }
}

impl DrawSurface for SvgCanvas {
    fn fill_rect(&mut self, fill: FillRect) {
        let r = fill.rect;
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            r.x,
            r.y,
            r.width,
            r.height,
            fill.color.to_svg()
        );
    }
}

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
