//! Horizontal scroll state: offset advance, pass completion, loop counting.

/// Tracks the horizontal text position across frames.
///
/// The sign of the configured speed picks the direction: non-negative speed
/// scrolls right-to-left (offset decreasing), negative speed left-to-right.
/// A pass completes when the text has fully left the visible width, at which
/// point the offset resets and a finite loop budget shrinks by one.
#[derive(Debug)]
pub struct Scroller {
    x: i32,
    origin_x: i32,
    direction: i32,
    loops_remaining: i32,
}

impl Scroller {
    /// Create a scroller starting at `origin_x`. `loops` of -1 (or any
    /// negative value) means loop forever.
    pub fn new(speed: f32, origin_x: i32, loops: i32) -> Self {
        Self {
            x: origin_x,
            origin_x,
            direction: if speed >= 0.0 { -1 } else { 1 },
            loops_remaining: loops,
        }
    }

    /// Current horizontal draw origin.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// All requested passes have completed; the render loop should stop.
    pub fn finished(&self) -> bool {
        self.loops_remaining == 0
    }

    /// Advance one frame.
    ///
    /// `text_width` is the pixel width the last draw reported and
    /// `visible_width` the canvas width. Returns true when this step
    /// completed a pass.
    pub fn step(&mut self, text_width: i32, visible_width: i32) -> bool {
        self.x += self.direction;

        let pass_complete = (self.direction < 0 && self.x + text_width < 0)
            || (self.direction > 0 && self.x > visible_width);

        if pass_complete {
            // Scrolling left-to-right re-enters with the text's tail, so the
            // reset point sits one text-width before the origin.
            self.x = self.origin_x
                + if self.direction > 0 { -text_width } else { 0 };
            if self.loops_remaining > 0 {
                self.loops_remaining -= 1;
            }
        }
        pass_complete
    }
}
