//! PixelBuffer: the in-memory frame the loop draws into.
//!
//! Flat `Vec<Rgb>` with row-major indexing for cache-friendly fills and the
//! row-pair walk the terminal backend does at present time.

use crate::types::Rgb;

use super::Canvas;

/// A 2D grid of RGB pixels.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: i32,
    height: i32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a buffer filled with black.
    pub fn new(width: i32, height: i32) -> Self {
        let size = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; size],
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Read a pixel (None when out of bounds).
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Raw pixel slice for the presentation pass.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

impl Canvas for PixelBuffer {
    #[inline]
    fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    fn height(&self) -> i32 {
        self.height
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.pixels[idx] = color;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_black() {
        let buffer = PixelBuffer::new(4, 2);
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 2);
        assert!(buffer.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn test_set_and_get_pixel() {
        let mut buffer = PixelBuffer::new(8, 8);
        buffer.set_pixel(3, 5, Rgb::WHITE);
        assert_eq!(buffer.get(3, 5), Some(Rgb::WHITE));
        assert_eq!(buffer.get(5, 3), Some(Rgb::BLACK));
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.set_pixel(-1, 0, Rgb::WHITE);
        buffer.set_pixel(0, -1, Rgb::WHITE);
        buffer.set_pixel(4, 0, Rgb::WHITE);
        buffer.set_pixel(0, 4, Rgb::WHITE);
        assert!(buffer.pixels().iter().all(|&p| p == Rgb::BLACK));
        assert_eq!(buffer.get(4, 0), None);
    }

    #[test]
    fn test_fill() {
        let mut buffer = PixelBuffer::new(3, 3);
        let red = Rgb::new(255, 0, 0);
        buffer.fill(red);
        assert!(buffer.pixels().iter().all(|&p| p == red));
    }
}
