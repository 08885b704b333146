//! Blink gating: decides whether text is drawn on a given frame.
//!
//! Purely a function of the frame counter and the configured on/off
//! durations (in frames). The counter starts at zero, so the first frame is
//! always visible when blinking is enabled.

/// Whether text should be drawn on this frame.
///
/// With `on <= 0` blinking is disabled and every frame is visible. Otherwise
/// the visibility pattern over one period of `on + off` frames is `on`
/// visible frames followed by `off` dark frames.
pub fn is_visible(frame_counter: u64, on: i32, off: i32) -> bool {
    if on <= 0 {
        return true;
    }
    // Sum in u64: on and off each fit i32, their sum may not.
    let period = on as u64 + off.max(0) as u64;
    frame_counter % period < on as u64
}
