//! # Virtual Mouse
//!
//! Gesture classification and cursor-control engine for hand-landmark based
//! mouse control.
//!
//! ## Overview
//!
//! An external hand tracker produces one [`LandmarkSnapshot`] per camera
//! frame (or nothing when no hand is visible). This library turns that
//! stream into discrete mouse actions and smoothed cursor motion:
//!
//! - [`landmark`]: snapshot data model and pairwise distance evaluation
//! - [`gesture`]: priority-ordered gesture classification with cooldown
//! - [`cursor`]: exponential cursor smoothing and screen mapping
//! - [`session`]: per-frame wiring and the action-dispatch boundary
//! - [`trace`]: serializable landmark recordings for replay and benchmarks
//! - [`app`]: CLI and configuration management
//!
//! ## Frame Pipeline
//!
//! ```text
//! ┌──────────────┐    ┌─────────────┐    ┌──────────────┐    ┌─────────────┐
//! │   Landmark   │───▶│ DistanceSet │───▶│  Classifier  │───▶│ MouseAction │
//! │   Snapshot   │    │   (pure)    │    │ (+ cooldown) │    │  dispatch   │
//! └──────────────┘    └─────────────┘    └──────┬───────┘    └─────────────┘
//!                                               │ Move
//!                                        ┌──────▼───────┐
//!                                        │   Smoother   │
//!                                        └──────────────┘
//! ```
//!
//! Camera capture, the landmark detector, OS input injection, and overlay
//! rendering are external collaborators; this crate ends at the
//! [`ActionDispatcher`] seam.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use virtual_mouse::{GestureConfig, LandmarkId, LandmarkSnapshot, ScreenBounds, Session};
//!
//! let mut session = Session::new(GestureConfig::default(), ScreenBounds::new(1920.0, 1080.0))
//!     .expect("default config is valid");
//!
//! // Full hand with the thumb tip touching the index tip: a left click.
//! let mut snapshot = LandmarkSnapshot::new();
//! snapshot.set(LandmarkId::ThumbTip, 0.500, 0.500);
//! snapshot.set(LandmarkId::IndexTip, 0.505, 0.500);
//! snapshot.set(LandmarkId::IndexBase, 0.505, 0.250);
//! snapshot.set(LandmarkId::MiddleTip, 0.600, 0.500);
//! snapshot.set(LandmarkId::RingTip, 0.680, 0.500);
//! snapshot.set(LandmarkId::PinkyTip, 0.760, 0.500);
//!
//! let output = session.process_frame(Some(&snapshot), Duration::ZERO);
//! assert!(output.action.is_some());
//! ```

pub mod app;
pub mod cursor;
pub mod gesture;
pub mod landmark;
pub mod session;
pub mod trace;

// Re-export commonly used types
pub use app::config::{GestureConfig, Preset};
pub use cursor::{CursorSmoother, ScreenBounds};
pub use gesture::{Gesture, GestureClassifier};
pub use landmark::{DistanceSet, LandmarkId, LandmarkPair, LandmarkSnapshot, Point};
pub use session::{
    ActionDispatcher, ClickKind, FrameOutput, MouseAction, ScrollDirection, Session,
};
pub use trace::LandmarkTrace;

/// Result type alias for the virtual mouse engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the virtual mouse engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value is outside its valid domain. Fatal at session
    /// construction; no frame is ever processed with an invalid config.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The current snapshot is missing a landmark that a reached gesture
    /// check requires. Recovered locally by dropping the frame.
    #[error("Incomplete snapshot: missing landmark {0}")]
    IncompleteSnapshot(LandmarkId),

    #[error("Trace error: {0}")]
    Trace(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
