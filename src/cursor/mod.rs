//! Cursor smoothing and screen mapping
//!
//! Converts the raw cursor target into a jitter-free position using an
//! exponential moving average, and maps normalized tracker coordinates onto
//! the screen.

use serde::{Deserialize, Serialize};

/// Absolute screen dimensions the cursor is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: f64,
    pub height: f64,
}

impl ScreenBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale a normalized [0,1] coordinate to screen space.
    pub fn scale(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.width, y * self.height)
    }

    /// Clamp a screen coordinate inside the visible area.
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x.clamp(0.0, (self.width - 1.0).max(0.0)),
            y.clamp(0.0, (self.height - 1.0).max(0.0)),
        )
    }
}

/// Exponential moving average filter for the cursor position.
///
/// `smoothed = factor * previous + (1 - factor) * raw`
///
/// A factor close to 1 biases toward stability (sluggish but jitter-free),
/// close to 0 toward raw responsiveness. The very first sample passes
/// through unchanged; on frames without a move target the state simply
/// holds, so the cursor keeps its last position across clicks and scrolls.
#[derive(Debug, Clone, Copy)]
pub struct CursorSmoother {
    factor: f64,
    current: Option<(f64, f64)>,
}

impl CursorSmoother {
    /// Create a smoother with the given factor in [0,1]. The factor comes
    /// from a validated [`GestureConfig`](crate::GestureConfig).
    pub fn new(factor: f64) -> Self {
        Self {
            factor,
            current: None,
        }
    }

    /// Blend a raw target into the smoothed position and return it.
    pub fn smooth(&mut self, raw_x: f64, raw_y: f64) -> (f64, f64) {
        let next = match self.current {
            Some((px, py)) => (
                self.factor * px + (1.0 - self.factor) * raw_x,
                self.factor * py + (1.0 - self.factor) * raw_y,
            ),
            None => (raw_x, raw_y),
        };
        self.current = Some(next);
        next
    }

    /// Last emitted position, if any move has happened this session.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.current
    }

    /// Reset for a fresh session.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
