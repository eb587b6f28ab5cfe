//! Gesture categories and classification

mod classifier;

pub use classifier::{ClassifierState, GestureClassifier};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The mutually-exclusive gesture categories, one per processed frame.
///
/// Variant order is the classification priority: when several pinch
/// conditions hold simultaneously, the first listed wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Index tip pinched to middle tip
    DoubleClick,
    /// Thumb tip pinched to index tip
    LeftClick,
    /// Thumb tip pinched to index base knuckle
    RightClick,
    /// Thumb tip pinched to ring tip
    ScrollUp,
    /// Thumb tip pinched to pinky tip
    ScrollDown,
    /// Thumb near index tip without a pinch: cursor tracking
    Move,
    /// No condition matched; no action this frame
    Idle,
}

impl Gesture {
    /// Whether this gesture fires a discrete action and is therefore
    /// subject to the action cooldown. `Move` and `Idle` are exempt so
    /// cursor tracking stays continuous.
    pub fn is_gated(&self) -> bool {
        !matches!(self, Gesture::Move | Gesture::Idle)
    }

    /// Stable lowercase name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::DoubleClick => "double_click",
            Gesture::LeftClick => "left_click",
            Gesture::RightClick => "right_click",
            Gesture::ScrollUp => "scroll_up",
            Gesture::ScrollDown => "scroll_down",
            Gesture::Move => "move",
            Gesture::Idle => "idle",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gated_gestures() {
        assert!(Gesture::DoubleClick.is_gated());
        assert!(Gesture::LeftClick.is_gated());
        assert!(Gesture::RightClick.is_gated());
        assert!(Gesture::ScrollUp.is_gated());
        assert!(Gesture::ScrollDown.is_gated());

        assert!(!Gesture::Move.is_gated());
        assert!(!Gesture::Idle.is_gated());
    }

    #[test]
    fn test_gesture_serialization() {
        let json = serde_json::to_string(&Gesture::ScrollUp).unwrap();
        assert_eq!(json, "\"scroll_up\"");
        let back: Gesture = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Gesture::ScrollUp);
    }
}
