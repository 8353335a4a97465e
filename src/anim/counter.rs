//! Counter - integer count-up sampled at a fixed frame rate
//!
//! Linear interpolation from 0 to a target, advanced in discrete frames so
//! the final frame lands on the target exactly instead of drifting past or
//! short of it through per-frame rounding.

/// Sampling rate for the count-up, frames per second
pub const FRAME_RATE: u32 = 60;

/// Animated count-up from 0 to `target` over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    target: u32,
    total_frames: u32,
    frame: u32,
}

impl Counter {
    /// Delay between frames in ms
    pub const FRAME_MS: u32 = 1000 / FRAME_RATE;

    pub fn new(target: u32, duration_ms: u32) -> Self {
        let total_frames = ((duration_ms as f64 / 1000.0) * FRAME_RATE as f64).round() as u32;
        Self {
            target,
            total_frames: total_frames.max(1),
            frame: 0,
        }
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn done(&self) -> bool {
        self.frame >= self.total_frames
    }

    /// Displayed value at the current frame
    pub fn value(&self) -> u32 {
        let progress = self.frame as f64 / self.total_frames as f64;
        (self.target as f64 * progress).round() as u32
    }

    /// Advance one frame; yields the new value, or `None` once finished.
    pub fn tick(&mut self) -> Option<u32> {
        if self.done() {
            return None;
        }
        self.frame += 1;
        Some(self.value())
    }
}

/// Group a number with thousands separators: 54053 -> "54,053"
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_seconds_at_60fps_is_300_frames() {
        assert_eq!(Counter::new(12, 5000).total_frames(), 300);
    }

    #[test]
    fn starts_at_zero() {
        let c = Counter::new(12, 5000);
        assert_eq!(c.value(), 0);
        assert!(!c.done());
    }

    #[test]
    fn every_frame_matches_linear_interpolation() {
        let mut c = Counter::new(12, 5000);
        let total = c.total_frames();
        for f in 1..=total {
            let v = c.tick().unwrap();
            let expected = (12.0 * f as f64 / total as f64).round() as u32;
            assert_eq!(v, expected, "frame {f}");
        }
        assert!(c.done());
    }

    #[test]
    fn final_frame_equals_target_exactly() {
        let mut c = Counter::new(54053, 5000);
        let mut last = 0;
        while let Some(v) = c.tick() {
            last = v;
        }
        assert_eq!(last, 54053);
    }

    #[test]
    fn halfway_value_of_large_target() {
        let mut c = Counter::new(54053, 5000);
        let mut v = 0;
        for _ in 0..150 {
            v = c.tick().unwrap();
        }
        assert_eq!(v, 27027);
    }

    #[test]
    fn values_are_monotone_non_decreasing() {
        let mut c = Counter::new(2, 5000);
        let mut prev = 0;
        while let Some(v) = c.tick() {
            assert!(v >= prev);
            prev = v;
        }
        assert_eq!(prev, 2);
    }

    #[test]
    fn tick_after_completion_yields_none() {
        let mut c = Counter::new(5, 100);
        while c.tick().is_some() {}
        assert_eq!(c.tick(), None);
        assert_eq!(c.value(), 5);
    }

    #[test]
    fn sub_frame_duration_still_reaches_target() {
        let mut c = Counter::new(7, 1);
        assert_eq!(c.total_frames(), 1);
        assert_eq!(c.tick(), Some(7));
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(12), "12");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(54053), "54,053");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
