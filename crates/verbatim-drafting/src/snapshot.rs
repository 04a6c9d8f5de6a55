//! Versioned workflow snapshots
//!
//! State crosses stage boundaries (and process restarts) as
//! `{"version": 1, "state": {...}}`. Unknown versions are rejected rather
//! than guessed at.

use crate::error::DraftingError;
use serde::{Deserialize, Serialize};
use verbatim_domain::WorkflowState;

/// Snapshot format version written by this build
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    state: &'a WorkflowState,
}

#[derive(Deserialize)]
struct SnapshotIn {
    version: u32,
    state: serde_json::Value,
}

/// Encode a workflow state as a versioned JSON snapshot
pub fn encode(state: &WorkflowState) -> Result<String, DraftingError> {
    let snapshot = SnapshotOut {
        version: SNAPSHOT_VERSION,
        state,
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Decode a versioned JSON snapshot
pub fn decode(json: &str) -> Result<WorkflowState, DraftingError> {
    let snapshot: SnapshotIn = serde_json::from_str(json)?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(DraftingError::UnsupportedSnapshotVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    Ok(serde_json::from_value(snapshot.state)?)
}
