//! Animated numeric counters
//!
//! A counter runs from 0 to its target over a fixed duration, driven by
//! animation frames. Each frame maps elapsed time to a value by linear
//! interpolation; the last frame always shows the exact target.

/// Linear interpolation between `from` and `to`
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Fraction of the animation completed, clamped to [0, 1]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// One counter's animation state
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    duration_ms: f64,
    start_ms: Option<f64>,
    decimals: usize,
}

/// Value to display for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub value: f64,
    pub done: bool,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            start_ms: None,
            decimals: 0,
        }
    }

    /// Parse a `data-count` attribute. Decimal places in the attribute are
    /// kept when displaying.
    pub fn from_attribute(raw: &str, duration_ms: f64) -> Option<Self> {
        let raw = raw.trim();
        let target: f64 = raw.parse().ok().filter(|v: &f64| v.is_finite())?;
        let decimals = raw.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0);
        Some(Self {
            decimals,
            ..Self::new(target, duration_ms)
        })
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Compute the frame for timestamp `now_ms`. The first call marks the
    /// start of the animation.
    pub fn frame(&mut self, now_ms: f64) -> CounterFrame {
        let start = *self.start_ms.get_or_insert(now_ms);
        let p = progress(now_ms - start, self.duration_ms);

        if p >= 1.0 {
            return CounterFrame {
                value: self.target,
                done: true,
            };
        }

        let scale = 10f64.powi(self.decimals as i32);
        let value = (lerp(0.0, self.target, p) * scale).round() / scale;
        CounterFrame { value, done: false }
    }

    /// Text for a frame value, with an optional suffix (`+`, `%`, `k`...)
    pub fn format(&self, value: f64, suffix: &str) -> String {
        format!("{:.*}{}", self.decimals, value, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamped() {
        assert_eq!(progress(-5.0, 100.0), 0.0);
        assert_eq!(progress(50.0, 100.0), 0.5);
        assert_eq!(progress(500.0, 100.0), 1.0);
        assert_eq!(progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn test_frames_interpolate_and_finish_on_target() {
        let mut c = CounterAnimation::new(120.0, 1000.0);

        let first = c.frame(5000.0);
        assert_eq!(first, CounterFrame { value: 0.0, done: false });

        let mid = c.frame(5500.0);
        assert_eq!(mid.value, 60.0);
        assert!(!mid.done);

        let last = c.frame(6200.0);
        assert_eq!(last, CounterFrame { value: 120.0, done: true });
    }

    #[test]
    fn test_values_never_decrease() {
        let mut c = CounterAnimation::new(37.0, 300.0);
        let mut prev = -1.0;
        for t in (0..=330).step_by(16) {
            let f = c.frame(t as f64);
            assert!(f.value >= prev);
            prev = f.value;
        }
        assert_eq!(prev, 37.0);
    }

    #[test]
    fn test_attribute_parsing_and_format() {
        let c = CounterAnimation::from_attribute("4.5", 100.0).unwrap();
        assert_eq!(c.format(4.5, "k"), "4.5k");

        let c = CounterAnimation::from_attribute(" 250 ", 100.0).unwrap();
        assert_eq!(c.format(250.0, "+"), "250+");

        assert!(CounterAnimation::from_attribute("many", 100.0).is_none());
    }
}
