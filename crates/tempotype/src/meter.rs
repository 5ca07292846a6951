//! Typing speed measurement from keystroke timing.

use std::collections::VecDeque;
use std::time::Duration;

/// Default span of recent keystrokes considered when measuring speed.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(2);

/// Derives a typing speed in characters per second from keystroke times.
///
/// Timestamps are offsets from any fixed origin (e.g. session start), which
/// keeps the meter deterministic and testable. Only keystrokes inside the
/// sliding window ending at the latest keystroke count.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tempotype::TypingMeter;
///
/// let mut meter = TypingMeter::default();
/// for ms in [0, 100, 200, 300, 400] {
///     meter.record(Duration::from_millis(ms));
/// }
/// assert_eq!(meter.speed(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TypingMeter {
    window: Duration,
    strokes: VecDeque<Duration>,
}

impl TypingMeter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            strokes: VecDeque::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Records a keystroke at `at`.
    ///
    /// A timestamp earlier than the previous keystroke is treated as
    /// simultaneous with it.
    pub fn record(&mut self, at: Duration) {
        let at = match self.strokes.back() {
            Some(&last) if at < last => last,
            _ => at,
        };
        self.strokes.push_back(at);
        while let Some(&first) = self.strokes.front() {
            if at - first > self.window {
                self.strokes.pop_front();
            } else {
                break;
            }
        }
    }

    /// Current speed in characters per second.
    ///
    /// Zero until two keystrokes at distinct times are inside the window.
    pub fn speed(&self) -> f64 {
        let (Some(first), Some(last)) = (self.strokes.front(), self.strokes.back()) else {
            return 0.0;
        };
        let span = (*last - *first).as_secs_f64();
        if span <= 0.0 {
            return 0.0;
        }
        (self.strokes.len() - 1) as f64 / span
    }

    /// Number of keystrokes currently inside the window.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn reset(&mut self) {
        self.strokes.clear();
    }
}

impl Default for TypingMeter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
