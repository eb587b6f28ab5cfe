//! Pairwise distance evaluation
//!
//! Pure derivation of the named landmark-pair distances from a snapshot.
//! No state, no side effects; a pair whose endpoint is missing yields no
//! distance rather than a fabricated one.

use super::{LandmarkId, LandmarkSnapshot};
use std::fmt;

/// The landmark pairs the gesture checks measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkPair {
    /// Thumb tip to index tip (left click / move pinch)
    ThumbIndexTip,
    /// Index tip to middle tip (double click pinch)
    IndexMiddleTip,
    /// Thumb tip to index base knuckle (right click pinch)
    ThumbIndexBase,
    /// Thumb tip to ring tip (scroll up pinch)
    ThumbRingTip,
    /// Thumb tip to pinky tip (scroll down pinch)
    ThumbPinkyTip,
}

impl LandmarkPair {
    /// All measured pairs.
    pub const ALL: [LandmarkPair; 5] = [
        LandmarkPair::ThumbIndexTip,
        LandmarkPair::IndexMiddleTip,
        LandmarkPair::ThumbIndexBase,
        LandmarkPair::ThumbRingTip,
        LandmarkPair::ThumbPinkyTip,
    ];

    /// The two landmarks this pair spans.
    pub fn endpoints(&self) -> (LandmarkId, LandmarkId) {
        match self {
            LandmarkPair::ThumbIndexTip => (LandmarkId::ThumbTip, LandmarkId::IndexTip),
            LandmarkPair::IndexMiddleTip => (LandmarkId::IndexTip, LandmarkId::MiddleTip),
            LandmarkPair::ThumbIndexBase => (LandmarkId::ThumbTip, LandmarkId::IndexBase),
            LandmarkPair::ThumbRingTip => (LandmarkId::ThumbTip, LandmarkId::RingTip),
            LandmarkPair::ThumbPinkyTip => (LandmarkId::ThumbTip, LandmarkId::PinkyTip),
        }
    }
}

impl fmt::Display for LandmarkPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.endpoints();
        write!(f, "{a}<->{b}")
    }
}

/// Pairwise Euclidean distances derived from one snapshot.
///
/// Distances are in normalized coordinate space. A pair is `None` when
/// either endpoint was missing from the snapshot; callers that need such a
/// distance must treat the frame as incomplete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSet {
    // Per pair: the distance, or the first missing endpoint.
    measures: [Result<f64, LandmarkId>; 5],
}

impl DistanceSet {
    /// Measure all named pairs from a snapshot.
    pub fn measure(snapshot: &LandmarkSnapshot) -> Self {
        let mut measures = [Err(LandmarkId::ThumbTip); 5];
        for (slot, pair) in measures.iter_mut().zip(LandmarkPair::ALL) {
            let (a, b) = pair.endpoints();
            *slot = match (snapshot.get(a), snapshot.get(b)) {
                (Some(pa), Some(pb)) => Ok(pa.distance_to(pb)),
                (None, _) => Err(a),
                (_, None) => Err(b),
            };
        }
        Self { measures }
    }

    /// Distance for a pair, if both endpoints were present.
    pub fn get(&self, pair: LandmarkPair) -> Option<f64> {
        self.measures[pair as usize].ok()
    }

    /// Distance for a pair, or the missing endpoint as an error.
    pub fn require(&self, pair: LandmarkPair) -> crate::Result<f64> {
        self.measures[pair as usize].map_err(crate::Error::IncompleteSnapshot)
    }

    /// Whether every named pair has a distance.
    pub fn is_complete(&self) -> bool {
        self.measures.iter().all(Result::is_ok)
    }
}
