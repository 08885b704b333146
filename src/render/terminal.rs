//! Terminal presentation backend.
//!
//! Simulates the LED matrix on the terminal: every character cell carries
//! two vertically stacked pixels via the upper-half-block glyph (▀), with
//! the foreground color as the top pixel and the background as the bottom.
//! A whole frame is encoded into one byte buffer and written with a single
//! flush, so a frame never appears half-drawn.

use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::types::Rgb;

use super::{Canvas, Display, PixelBuffer};

const HALF_BLOCK: &str = "▀";

fn term_color(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Encode a frame as terminal escape sequences into `out`.
///
/// Colors are only re-emitted when they change from cell to cell, which
/// collapses the common solid-background runs into a handful of bytes.
fn encode_frame(frame: &PixelBuffer, out: &mut impl Write) -> io::Result<()> {
    let mut last_fg: Option<Rgb> = None;
    let mut last_bg: Option<Rgb> = None;

    let rows = (frame.height() + 1) / 2;
    for row in 0..rows {
        queue!(out, cursor::MoveTo(0, row as u16))?;
        for x in 0..frame.width() {
            let top = frame.get(x, row * 2).unwrap_or(Rgb::BLACK);
            let bottom = frame.get(x, row * 2 + 1).unwrap_or(Rgb::BLACK);

            if last_fg != Some(top) {
                queue!(out, SetForegroundColor(term_color(top)))?;
                last_fg = Some(top);
            }
            if last_bg != Some(bottom) {
                queue!(out, SetBackgroundColor(term_color(bottom)))?;
                last_bg = Some(bottom);
            }
            queue!(out, Print(HALF_BLOCK))?;
        }
    }
    queue!(out, ResetColor)?;
    Ok(())
}

// =============================================================================
// TerminalDisplay
// =============================================================================

/// Double-buffered matrix display on the alternate terminal screen.
///
/// Owns the front (visible) buffer; the render loop owns the back buffer and
/// trades it in on every [`swap`](Display::swap). The terminal state is
/// restored on drop.
pub struct TerminalDisplay {
    front: PixelBuffer,
    /// Reused frame encoding buffer; one write syscall per frame.
    batch: Vec<u8>,
}

impl TerminalDisplay {
    /// Take over the terminal and show a blank matrix.
    pub fn new(width: i32, height: i32) -> io::Result<Self> {
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        let mut display = Self {
            front: PixelBuffer::new(width, height),
            batch: Vec::with_capacity(16384),
        };
        display.present()?;
        Ok(display)
    }

    fn present(&mut self) -> io::Result<()> {
        self.batch.clear();
        encode_frame(&self.front, &mut self.batch)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.batch)?;
        stdout.flush()
    }
}

impl Display for TerminalDisplay {
    type Canvas = PixelBuffer;

    fn create_offscreen(&self) -> PixelBuffer {
        PixelBuffer::new(self.front.width(), self.front.height())
    }

    fn swap(&mut self, back: PixelBuffer) -> io::Result<PixelBuffer> {
        let previous = std::mem::replace(&mut self.front, back);
        self.present()?;
        Ok(previous)
    }

    fn width(&self) -> i32 {
        self.front.width()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.front.fill(Rgb::BLACK);
        self.present()
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
    }
}

// =============================================================================
// Tests
// =============================================================================
