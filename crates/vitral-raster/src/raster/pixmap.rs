use rayon::prelude::*;

use crate::paint::Color;

use super::compiled::CompiledPaint;

/// CPU pixel buffer in linear premultiplied RGBA.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Pixmap {
    /// Creates a transparent pixmap. Zero dimensions yield an empty buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self { width, height, pixels: vec![Color::transparent(); len] }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Fills the whole pixmap with a compiled paint.
    ///
    /// Pixels sample at their centers. Scanlines are independent, so they are
    /// shaded in parallel; the paint is shared read-only across threads.
    pub fn fill(&mut self, paint: &CompiledPaint) {
        let width = self.width as usize;
        if width == 0 {
            return;
        }
        self.pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, span)| {
                paint.shade_span(row as f32 + 0.5, 0.5, span);
            });
    }

    /// Raw bytes of the premultiplied f32 pixel buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Converts to straight-alpha 8-bit RGBA, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            let (r, g, b, a) = px.to_straight();
            out.push((r.clamp(0.0, 1.0) * 255.0 + 0.5) as u8);
            out.push((g.clamp(0.0, 1.0) * 255.0 + 0.5) as u8);
            out.push((b.clamp(0.0, 1.0) * 255.0 + 0.5) as u8);
            out.push((a.clamp(0.0, 1.0) * 255.0 + 0.5) as u8);
        }
        out
    }
}
