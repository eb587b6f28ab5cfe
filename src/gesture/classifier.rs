//! Stateful gesture classification
//!
//! Maps one frame's distance set to a single gesture category, applying the
//! fixed priority order and the action cooldown. The evaluation order is the
//! designed conflict-resolution policy: when several pinches hold at once,
//! the first matching check wins.

use crate::app::config::GestureConfig;
use crate::landmark::{DistanceSet, LandmarkPair};
use crate::Gesture;
use std::time::Duration;
use tracing::debug;

/// Classifier state carried across frames within one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierState {
    /// Most recently classified gesture category.
    pub last_gesture: Gesture,
    /// Frame time at which the last gated gesture fired. `Move` and `Idle`
    /// never update this.
    pub last_action_time: Option<Duration>,
}

impl Default for ClassifierState {
    fn default() -> Self {
        Self {
            last_gesture: Gesture::Idle,
            last_action_time: None,
        }
    }
}

/// Priority-ordered gesture classifier with action cooldown.
///
/// Owns its configuration and state for the duration of a session; the
/// configuration is never mutated after construction.
#[derive(Debug)]
pub struct GestureClassifier {
    config: GestureConfig,
    state: ClassifierState,
}

impl GestureClassifier {
    /// Create a classifier for a session. Fails with
    /// [`Error::Config`](crate::Error::Config) if the configuration is
    /// invalid, before any frame is processed.
    pub fn new(config: GestureConfig) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: ClassifierState::default(),
        })
    }

    /// Classify one frame.
    ///
    /// `now` is the frame timestamp relative to the session start; frames
    /// must arrive in order. Returns
    /// [`Error::IncompleteSnapshot`](crate::Error::IncompleteSnapshot) when a
    /// reached check lacks its distance, in which case the caller drops the
    /// frame and no state is mutated.
    pub fn classify(&mut self, distances: &DistanceSet, now: Duration) -> crate::Result<Gesture> {
        // While the cooldown is active no gated check is evaluated; the
        // frame falls straight through to cursor tracking.
        if !self.cooldown_active(now) {
            let checks = [
                (
                    LandmarkPair::IndexMiddleTip,
                    self.config.double_click_threshold,
                    Gesture::DoubleClick,
                ),
                (
                    LandmarkPair::ThumbIndexTip,
                    self.config.click_threshold,
                    Gesture::LeftClick,
                ),
                (
                    LandmarkPair::ThumbIndexBase,
                    self.config.right_click_threshold,
                    Gesture::RightClick,
                ),
                (
                    LandmarkPair::ThumbRingTip,
                    self.config.scroll_threshold,
                    Gesture::ScrollUp,
                ),
                (
                    LandmarkPair::ThumbPinkyTip,
                    self.config.scroll_threshold,
                    Gesture::ScrollDown,
                ),
            ];

            for (pair, threshold, gesture) in checks {
                if distances.require(pair)? < threshold {
                    debug!(%gesture, at = ?now, "gesture fired");
                    self.state.last_gesture = gesture;
                    self.state.last_action_time = Some(now);
                    return Ok(gesture);
                }
            }
        }

        // Cursor tracking is exempt from the cooldown.
        let gesture = if distances.require(LandmarkPair::ThumbIndexTip)? < self.config.move_threshold
        {
            Gesture::Move
        } else {
            Gesture::Idle
        };
        self.state.last_gesture = gesture;
        Ok(gesture)
    }

    fn cooldown_active(&self, now: Duration) -> bool {
        match self.state.last_action_time {
            Some(fired) => now.saturating_sub(fired) < self.config.cooldown(),
            None => false,
        }
    }

    /// Current classifier state.
    pub fn state(&self) -> &ClassifierState {
        &self.state
    }

    /// The session configuration this classifier was built with.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Reset state for a fresh session.
    pub fn reset(&mut self) {
        self.state = ClassifierState::default();
    }
}
