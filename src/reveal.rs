//! Scroll-triggered counters and skill bars.

/// `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A single count-up from 0 to `target` over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub target: f64,
    pub duration_ms: f64,
}

impl CountUp {
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return self.target;
        }
        self.target * ease_out_cubic(elapsed_ms / self.duration_ms)
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Whole-number text shown in the counter element.
    pub fn display_at(&self, elapsed_ms: f64) -> String {
        format!("{}", self.value_at(elapsed_ms).floor() as i64)
    }
}

/// One-shot trigger bookkeeping for the page's counters.
#[derive(Debug, Clone)]
pub struct RevealController {
    started: Vec<bool>,
    counter_threshold: f64,
    skill_divisor: f64,
}

impl RevealController {
    pub fn new(counters: usize, counter_threshold: f64, skill_divisor: f64) -> Self {
        Self {
            started: vec![false; counters],
            counter_threshold,
            skill_divisor,
        }
    }

    /// Takes the current top edge of each counter (same order as
    /// registration) and returns the indices that start animating now.
    /// A counter is returned at most once over the controller's lifetime.
    pub fn scan_counters(&mut self, viewport_height: f64, tops: &[f64]) -> Vec<usize> {
        let limit = viewport_height * self.counter_threshold;
        let mut fired = Vec::new();
        for (i, (&top, started)) in tops.iter().zip(self.started.iter_mut()).enumerate() {
            if !*started && top < limit {
                *started = true;
                fired.push(i);
            }
        }
        fired
    }

    pub fn is_started(&self, index: usize) -> bool {
        self.started.get(index).copied().unwrap_or(false)
    }

    pub fn skill_bar_visible(&self, viewport_height: f64, top: f64) -> bool {
        top < viewport_height / self.skill_divisor
    }
}

/// Parses a `data-width` value such as `"85%"` or `"85"` into a percentage
/// clamped to `[0, 100]`.
pub fn parse_width(raw: &str) -> Option<f64> {
    let v: f64 = raw.trim().trim_end_matches('%').trim().parse().ok()?;
    v.is_finite().then(|| v.clamp(0.0, 100.0))
}

/// Parses a counter's `data-target`, accepting thousands separators.
pub fn parse_target(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '+').collect();
    cleaned.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
