//! Rendering: canvas abstraction, pixel buffer, draw primitive, and the
//! terminal presentation backend.
//!
//! The render loop only ever talks to the [`Canvas`] and [`Display`] traits.
//! A `Display` owns the visible front buffer; the loop owns the offscreen
//! back buffer and exchanges it wholesale on every [`Display::swap`], so the
//! two are never writable at the same time.

use std::io;

use crate::types::Rgb;

pub mod buffer;
pub mod terminal;
pub mod text;

pub use buffer::PixelBuffer;
pub use terminal::TerminalDisplay;
pub use text::draw_text;

// =============================================================================
// Canvas
// =============================================================================

/// A drawable pixel surface.
pub trait Canvas {
    /// Visible width in pixels.
    fn width(&self) -> i32;

    /// Visible height in pixels.
    fn height(&self) -> i32;

    /// Fill the whole surface with one color.
    fn fill(&mut self, color: Rgb);

    /// Set a single pixel. Out-of-bounds coordinates are silently ignored,
    /// which is what lets scrolled text run off either edge.
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb);
}

// =============================================================================
// Display
// =============================================================================

/// A double-buffered output device.
///
/// The swap contract: the previous frame stays visible until `swap` returns,
/// and the buffer handed back is the one that was just on display, ready to
/// be drawn into for the frame after next.
pub trait Display {
    type Canvas: Canvas;

    /// Allocate an offscreen buffer matching the display dimensions.
    fn create_offscreen(&self) -> Self::Canvas;

    /// Present `back` and return the previously visible buffer.
    fn swap(&mut self, back: Self::Canvas) -> io::Result<Self::Canvas>;

    /// Visible width in pixels.
    fn width(&self) -> i32;

    /// Blank the visible frame (shutdown path).
    fn clear(&mut self) -> io::Result<()>;
}
