use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Timeline of a match from `match/v4/timelines/by-match/{gameId}`.
///
/// The frame structure is not interpreted here and is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Timeline(pub Value);

impl Timeline {
    /// Number of frames, when the document has a `frames` array
    pub fn frame_count(&self) -> Option<usize> {
        self.0.get("frames").and_then(Value::as_array).map(Vec::len)
    }

    /// Milliseconds between frames
    pub fn frame_interval_ms(&self) -> Option<u64> {
        self.0.get("frameInterval").and_then(Value::as_u64)
    }
}
