//! Landmark data model
//!
//! Defines the per-frame snapshot of tracked hand landmarks and the pairwise
//! distance evaluation derived from it. A snapshot is produced by the
//! external hand tracker, consumed synchronously, and never retained past
//! one frame.

mod distance;

pub use distance::{DistanceSet, LandmarkPair};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The hand landmarks the engine tracks.
///
/// These are the six points of the MediaPipe hand model that the gesture
/// checks read; the tracker may report more, but only these are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkId {
    /// Thumb fingertip (model index 4)
    ThumbTip,
    /// Index fingertip (model index 8)
    IndexTip,
    /// Index finger base knuckle, MCP joint (model index 5)
    IndexBase,
    /// Middle fingertip (model index 12)
    MiddleTip,
    /// Ring fingertip (model index 16)
    RingTip,
    /// Pinky fingertip (model index 20)
    PinkyTip,
}

impl LandmarkId {
    /// All tracked landmarks, in model-index order.
    pub const ALL: [LandmarkId; 6] = [
        LandmarkId::ThumbTip,
        LandmarkId::IndexTip,
        LandmarkId::IndexBase,
        LandmarkId::MiddleTip,
        LandmarkId::RingTip,
        LandmarkId::PinkyTip,
    ];

    /// Index of this landmark in the 21-point MediaPipe hand model.
    pub fn model_index(&self) -> usize {
        match self {
            LandmarkId::ThumbTip => 4,
            LandmarkId::IndexBase => 5,
            LandmarkId::IndexTip => 8,
            LandmarkId::MiddleTip => 12,
            LandmarkId::RingTip => 16,
            LandmarkId::PinkyTip => 20,
        }
    }

    /// Stable lowercase name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            LandmarkId::ThumbTip => "thumb_tip",
            LandmarkId::IndexTip => "index_tip",
            LandmarkId::IndexBase => "index_base",
            LandmarkId::MiddleTip => "middle_tip",
            LandmarkId::RingTip => "ring_tip",
            LandmarkId::PinkyTip => "pinky_tip",
        }
    }
}

impl fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A normalized 2D coordinate in [0,1]x[0,1] camera space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Per-frame record of tracked landmark positions.
///
/// A landmark absent from the map means the tracker did not report it this
/// frame; the engine tolerates partial snapshots and never invents a
/// position for a missing landmark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSnapshot {
    positions: BTreeMap<LandmarkId, Point>,
}

impl LandmarkSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a landmark position in normalized coordinates.
    pub fn set(&mut self, id: LandmarkId, x: f64, y: f64) -> &mut Self {
        self.positions.insert(id, Point::new(x, y));
        self
    }

    /// Position of a landmark, if the tracker reported it.
    pub fn get(&self, id: LandmarkId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    /// Whether every tracked landmark is present.
    pub fn is_complete(&self) -> bool {
        LandmarkId::ALL.iter().all(|id| self.positions.contains_key(id))
    }

    /// Number of landmarks present.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no landmarks are present.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.3, 0.4);
        assert!((a.distance_to(b) - 0.5).abs() < 1e-12);
        assert_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point::new(0.12, 0.87);
        let b = Point::new(0.45, 0.33);
        assert_eq!(a.distance_to(b), b.distance_to(a));
    }

    #[test]
    fn test_snapshot_set_and_get() {
        let mut snapshot = LandmarkSnapshot::new();
        snapshot.set(LandmarkId::ThumbTip, 0.5, 0.6);

        let p = snapshot.get(LandmarkId::ThumbTip).unwrap();
        assert_eq!(p.x, 0.5);
        assert_eq!(p.y, 0.6);
        assert!(snapshot.get(LandmarkId::PinkyTip).is_none());
    }

    #[test]
    fn test_snapshot_completeness() {
        let mut snapshot = LandmarkSnapshot::new();
        assert!(snapshot.is_empty());
        assert!(!snapshot.is_complete());

        for id in LandmarkId::ALL {
            snapshot.set(id, 0.1, 0.2);
        }
        assert!(snapshot.is_complete());
        assert_eq!(snapshot.len(), 6);
    }

    #[test]
    fn test_snapshot_overwrites_landmark() {
        let mut snapshot = LandmarkSnapshot::new();
        snapshot.set(LandmarkId::IndexTip, 0.1, 0.1);
        snapshot.set(LandmarkId::IndexTip, 0.9, 0.9);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get(LandmarkId::IndexTip).unwrap().x, 0.9);
    }

    #[test]
    fn test_model_indices_match_mediapipe() {
        assert_eq!(LandmarkId::ThumbTip.model_index(), 4);
        assert_eq!(LandmarkId::IndexBase.model_index(), 5);
        assert_eq!(LandmarkId::IndexTip.model_index(), 8);
        assert_eq!(LandmarkId::MiddleTip.model_index(), 12);
        assert_eq!(LandmarkId::RingTip.model_index(), 16);
        assert_eq!(LandmarkId::PinkyTip.model_index(), 20);
    }

    #[test]
    fn test_snapshot_serialization_roundtrip() {
        let mut snapshot = LandmarkSnapshot::new();
        snapshot.set(LandmarkId::ThumbTip, 0.25, 0.75);
        snapshot.set(LandmarkId::IndexTip, 0.5, 0.5);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: LandmarkSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }

    #[test]
    fn test_landmark_id_display() {
        assert_eq!(LandmarkId::PinkyTip.to_string(), "pinky_tip");
        assert_eq!(LandmarkId::IndexBase.to_string(), "index_base");
    }
}
