//! Drift-free frame pacing.
//!
//! The clock keeps an absolute target instant and advances it by exactly one
//! interval per frame. Sleeping until an absolute target (instead of
//! sleeping for a relative delay) means a slow frame borrows from the next
//! frame's budget rather than shifting the whole schedule: cumulative drift
//! stays bounded by clock resolution no matter how long rendering takes.

use std::thread;
use std::time::{Duration, Instant};

/// Paces the render loop at a fixed interval derived from scroll speed.
///
/// A clock without an interval (speed 0) never blocks.
#[derive(Debug)]
pub struct FrameClock {
    interval: Option<Duration>,
    next_frame: Option<Instant>,
}

impl FrameClock {
    /// Create a clock ticking at `interval`, or a never-blocking clock.
    pub fn new(interval: Option<Duration>) -> Self {
        Self {
            interval,
            next_frame: None,
        }
    }

    /// Derive the frame interval from letters-per-second and a reference
    /// glyph width in pixels (one frame per scrolled pixel).
    ///
    /// Only the magnitude of `speed` matters here; its sign selects the
    /// scroll direction elsewhere. Zero speed yields a never-blocking clock.
    pub fn from_speed(speed: f32, reference_glyph_width: i32) -> Self {
        let magnitude = speed.abs();
        let interval = if magnitude > 0.0 && reference_glyph_width > 0 {
            let micros = 1_000_000.0 / magnitude / reference_glyph_width as f32;
            Some(Duration::from_micros(micros as u64))
        } else {
            None
        };
        Self::new(interval)
    }

    /// The configured inter-frame interval, if pacing is active.
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Advance the schedule by one frame, given the current time.
    ///
    /// The first call pins the baseline at `now` and returns no deadline (the
    /// first frame shows immediately). Every later call moves the stored
    /// target forward by exactly one interval — never from `now` — and
    /// returns the absolute deadline the caller should wait for.
    fn schedule(&mut self, now: Instant) -> Option<Instant> {
        let interval = self.interval?;
        match self.next_frame {
            None => {
                self.next_frame = Some(now);
                None
            }
            Some(previous) => {
                let target = previous + interval;
                self.next_frame = Some(target);
                Some(target)
            }
        }
    }

    /// Block until the next frame is due.
    pub fn tick(&mut self) {
        if let Some(target) = self.schedule(Instant::now()) {
            if let Some(wait) = target.checked_duration_since(Instant::now()) {
                thread::sleep(wait);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_does_not_block() {
        let mut clock = FrameClock::new(Some(Duration::from_millis(10)));
        assert_eq!(clock.schedule(Instant::now()), None);
    }

    #[test]
    fn test_targets_form_arithmetic_sequence() {
        let interval = Duration::from_millis(10);
        let mut clock = FrameClock::new(Some(interval));

        let start = Instant::now();
        clock.schedule(start);

        // Simulate wildly uneven render times: the deadlines must not care.
        let jitter = [3u64, 27, 0, 14, 9, 41];
        let mut elapsed = Duration::ZERO;
        for (i, ms) in jitter.iter().enumerate() {
            elapsed += Duration::from_millis(*ms);
            let target = clock.schedule(start + elapsed).unwrap();
            assert_eq!(target, start + interval * (i as u32 + 1));
        }
    }

    #[test]
    fn test_unpaced_clock_never_produces_deadlines() {
        let mut clock = FrameClock::new(None);
        for _ in 0..5 {
            assert_eq!(clock.schedule(Instant::now()), None);
        }
    }

    #[test]
    fn test_interval_from_speed() {
        // 7 letters/second with an 8px reference glyph: one pixel every
        // 1s / 56 ≈ 17857µs.
        let clock = FrameClock::from_speed(7.0, 8);
        assert_eq!(clock.interval(), Some(Duration::from_micros(17857)));

        // Sign only selects direction.
        let reverse = FrameClock::from_speed(-7.0, 8);
        assert_eq!(reverse.interval(), clock.interval());

        assert_eq!(FrameClock::from_speed(0.0, 8).interval(), None);
    }
}
