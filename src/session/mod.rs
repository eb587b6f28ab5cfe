//! Session wiring and output boundaries
//!
//! A [`Session`] owns one classifier and one smoother, runs the per-frame
//! pipeline synchronously, and emits [`MouseAction`] events plus per-frame
//! metrics. Actual input injection happens behind the [`ActionDispatcher`]
//! seam, outside this crate.

use crate::cursor::{CursorSmoother, ScreenBounds};
use crate::gesture::GestureClassifier;
use crate::landmark::{DistanceSet, LandmarkId, LandmarkSnapshot};
use crate::{Gesture, GestureConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{info, trace};

/// Which mouse button a click event presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickKind {
    Left,
    Double,
    Right,
}

/// Scroll direction for wheel events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Up,
    Down,
}

/// A discrete event for the input-injection collaborator, at most one per
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseAction {
    /// Move the cursor to an absolute screen coordinate
    MoveTo { x: f64, y: f64 },
    /// Press a mouse button
    Click(ClickKind),
    /// Turn the wheel one step
    Scroll(ScrollDirection),
}

impl fmt::Display for MouseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseAction::MoveTo { x, y } => write!(f, "move_to({x:.1}, {y:.1})"),
            MouseAction::Click(ClickKind::Left) => f.write_str("click"),
            MouseAction::Click(ClickKind::Double) => f.write_str("double_click"),
            MouseAction::Click(ClickKind::Right) => f.write_str("right_click"),
            MouseAction::Scroll(ScrollDirection::Up) => f.write_str("scroll_up"),
            MouseAction::Scroll(ScrollDirection::Down) => f.write_str("scroll_down"),
        }
    }
}

/// Boundary to the OS input-injection collaborator.
pub trait ActionDispatcher {
    fn dispatch(&mut self, action: &MouseAction) -> crate::Result<()>;
}

/// Dispatcher that logs actions instead of injecting them. Used by the
/// replay CLI and wherever real injection is unavailable.
#[derive(Debug, Default)]
pub struct LogDispatcher {
    dispatched: u64,
}

impl LogDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of actions dispatched so far.
    pub fn count(&self) -> u64 {
        self.dispatched
    }
}

impl ActionDispatcher for LogDispatcher {
    fn dispatch(&mut self, action: &MouseAction) -> crate::Result<()> {
        self.dispatched += 1;
        info!(%action, "dispatch");
        Ok(())
    }
}

/// Per-frame result handed to the caller: the classified gesture, the
/// action to dispatch (if any), and the processing duration for the
/// external benchmark consumer. No aggregation happens in-core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub gesture: Gesture,
    pub action: Option<MouseAction>,
    pub processing: Duration,
}

/// One gesture-control session: configuration plus all mutable engine
/// state. Single-threaded and frame-driven; one snapshot in, one output
/// out. Independent sessions never interfere.
#[derive(Debug)]
pub struct Session {
    classifier: GestureClassifier,
    smoother: CursorSmoother,
    screen: ScreenBounds,
}

impl Session {
    /// Create a session. The configuration is validated here, before any
    /// frame is processed, and is immutable afterwards.
    pub fn new(config: GestureConfig, screen: ScreenBounds) -> crate::Result<Self> {
        let smoother = CursorSmoother::new(config.smoothing_factor);
        let classifier = GestureClassifier::new(config)?;
        info!(?screen, "session started");
        Ok(Self {
            classifier,
            smoother,
            screen,
        })
    }

    /// Process one frame.
    ///
    /// `snapshot` is `None` when the tracker saw no hand; `now` is the frame
    /// timestamp relative to session start. Frames must be fed in arrival
    /// order. An incomplete snapshot is dropped silently (no action, no
    /// state change), never surfaced as an error.
    pub fn process_frame(
        &mut self,
        snapshot: Option<&LandmarkSnapshot>,
        now: Duration,
    ) -> FrameOutput {
        let started = Instant::now();

        let (gesture, action) = match snapshot {
            None => {
                trace!(at = ?now, "no hand detected");
                (Gesture::Idle, None)
            }
            Some(snapshot) => {
                let distances = DistanceSet::measure(snapshot);
                match self.classifier.classify(&distances, now) {
                    Ok(gesture) => (gesture, self.action_for(gesture, snapshot)),
                    Err(crate::Error::IncompleteSnapshot(missing)) => {
                        trace!(%missing, at = ?now, "dropping incomplete frame");
                        (Gesture::Idle, None)
                    }
                    Err(_) => (Gesture::Idle, None),
                }
            }
        };

        FrameOutput {
            gesture,
            action,
            processing: started.elapsed(),
        }
    }

    fn action_for(&mut self, gesture: Gesture, snapshot: &LandmarkSnapshot) -> Option<MouseAction> {
        match gesture {
            Gesture::LeftClick => Some(MouseAction::Click(ClickKind::Left)),
            Gesture::DoubleClick => Some(MouseAction::Click(ClickKind::Double)),
            Gesture::RightClick => Some(MouseAction::Click(ClickKind::Right)),
            Gesture::ScrollUp => Some(MouseAction::Scroll(ScrollDirection::Up)),
            Gesture::ScrollDown => Some(MouseAction::Scroll(ScrollDirection::Down)),
            Gesture::Move => {
                // Move fired off the thumb-index distance, so the index tip
                // is present.
                let tip = snapshot.get(LandmarkId::IndexTip)?;
                let (raw_x, raw_y) = self.screen.scale(tip.x, tip.y);
                let (x, y) = self.smoother.smooth(raw_x, raw_y);
                let (x, y) = self.screen.clamp(x, y);
                Some(MouseAction::MoveTo { x, y })
            }
            Gesture::Idle => None,
        }
    }

    /// The immutable session configuration.
    pub fn config(&self) -> &GestureConfig {
        self.classifier.config()
    }

    /// Screen bounds the cursor is mapped onto.
    pub fn screen(&self) -> ScreenBounds {
        self.screen
    }

    /// Last smoothed cursor position, if any move has happened.
    pub fn cursor_position(&self) -> Option<(f64, f64)> {
        self.smoother.position()
    }

    /// Reset all per-session state without touching the configuration.
    pub fn reset(&mut self) {
        self.classifier.reset();
        self.smoother.reset();
    }
}
