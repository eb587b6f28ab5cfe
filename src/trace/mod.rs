//! Landmark trace persistence
//!
//! A trace is a recorded landmark session: per-frame snapshots with
//! timestamps, stored as JSON so sessions can be replayed and benchmarked
//! without a camera attached.

use crate::landmark::LandmarkSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

/// Current trace file format version.
pub const FORMAT_VERSION: u32 = 1;

/// Descriptive header of a trace file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceMetadata {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub frame_count: usize,
    pub format_version: u32,
}

/// One recorded frame. `t` is seconds since session start; `snapshot` is
/// `None` for frames where no hand was detected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceFrame {
    pub t: f64,
    pub snapshot: Option<LandmarkSnapshot>,
}

impl TraceFrame {
    /// Frame timestamp as a [`Duration`] for the session clock. Negative
    /// timestamps in malformed files collapse to zero.
    pub fn timestamp(&self) -> Duration {
        Duration::from_secs_f64(self.t.max(0.0))
    }
}

/// A recorded landmark session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkTrace {
    pub metadata: TraceMetadata,
    pub frames: Vec<TraceFrame>,
}

impl LandmarkTrace {
    /// Create an empty trace with fresh metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: TraceMetadata {
                id: Uuid::new_v4(),
                name: name.into(),
                created_at: Utc::now(),
                frame_count: 0,
                format_version: FORMAT_VERSION,
            },
            frames: Vec::new(),
        }
    }

    /// Append one frame, keeping the metadata frame count in sync.
    pub fn push_frame(&mut self, t: f64, snapshot: Option<LandmarkSnapshot>) {
        self.frames.push(TraceFrame { t, snapshot });
        self.metadata.frame_count = self.frames.len();
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Duration covered by the trace, from zero to the last frame timestamp.
    pub fn duration(&self) -> Duration {
        self.frames
            .last()
            .map(TraceFrame::timestamp)
            .unwrap_or(Duration::ZERO)
    }

    /// Write the trace as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!(path = %path.display(), frames = self.frames.len(), "trace saved");
        Ok(())
    }

    /// Load a trace from disk, checking internal consistency.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let json = fs::read_to_string(path)?;
        let trace: Self = serde_json::from_str(&json)?;

        if trace.metadata.format_version != FORMAT_VERSION {
            warn!(
                found = trace.metadata.format_version,
                expected = FORMAT_VERSION,
                "trace format version mismatch, attempting to use anyway"
            );
        }
        if trace.metadata.frame_count != trace.frames.len() {
            return Err(crate::Error::Trace(format!(
                "frame count mismatch: metadata says {}, file has {}",
                trace.metadata.frame_count,
                trace.frames.len()
            )));
        }

        info!(path = %path.display(), frames = trace.frames.len(), "trace loaded");
        Ok(trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::LandmarkId;

    fn sample_trace() -> LandmarkTrace {
        let mut trace = LandmarkTrace::new("sample");
        let mut snapshot = LandmarkSnapshot::new();
        snapshot.set(LandmarkId::ThumbTip, 0.4, 0.5);
        snapshot.set(LandmarkId::IndexTip, 0.6, 0.5);
        trace.push_frame(0.0, Some(snapshot));
        trace.push_frame(0.033, None);
        trace
    }

    #[test]
    fn test_push_frame_tracks_count() {
        let trace = sample_trace();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.metadata.frame_count, 2);
    }

    #[test]
    fn test_duration_is_last_timestamp() {
        let trace = sample_trace();
        assert_eq!(trace.duration(), Duration::from_secs_f64(0.033));
        assert_eq!(LandmarkTrace::new("empty").duration(), Duration::ZERO);
    }

    #[test]
    fn test_negative_timestamp_collapses_to_zero() {
        let frame = TraceFrame {
            t: -0.5,
            snapshot: None,
        };
        assert_eq!(frame.timestamp(), Duration::ZERO);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces").join("sample.json");

        let trace = sample_trace();
        trace.save(&path).unwrap();

        let loaded = LandmarkTrace::load(&path).unwrap();
        assert_eq!(loaded.metadata.id, trace.metadata.id);
        assert_eq!(loaded.metadata.name, "sample");
        assert_eq!(loaded.len(), 2);
        assert!(loaded.frames[0].snapshot.is_some());
        assert!(loaded.frames[1].snapshot.is_none());
    }

    #[test]
    fn test_load_rejects_frame_count_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");

        let mut trace = sample_trace();
        trace.metadata.frame_count = 99;
        let json = serde_json::to_string_pretty(&trace).unwrap();
        std::fs::write(&path, json).unwrap();

        let err = LandmarkTrace::load(&path).unwrap_err();
        assert!(matches!(err, crate::Error::Trace(_)));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(LandmarkTrace::load(&path).is_err());
    }
}
