//! A single tracked identity.

use crate::tracker::rect::Centroid;
use crate::tracker::track_state::TrackState;

/// A persistent identity for one physical object across frames.
///
/// Only the id and the last matched centroid carry the association policy;
/// `state` and `missed` exist for the optional eviction extension and never
/// change observable behavior while eviction is disabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Unique identifier, assigned in creation order and never reused
    pub id: u64,
    /// Most recent centroid matched to this track
    pub last_centroid: Centroid,
    /// Current lifecycle state
    pub state: TrackState,
    /// Consecutive frames without a match
    pub missed: u32,
}

impl Track {
    pub fn new(id: u64, centroid: Centroid) -> Self {
        Self {
            id,
            last_centroid: centroid,
            state: TrackState::Active,
            missed: 0,
        }
    }

    /// Record a match: replace the stored centroid and reset the miss counter.
    pub fn mark_matched(&mut self, centroid: Centroid) {
        self.last_centroid = centroid;
        self.missed = 0;
        self.state = TrackState::Active;
    }

    /// Record a frame in which no detection matched this track.
    pub fn mark_missed(&mut self) {
        self.missed = self.missed.saturating_add(1);
    }

    pub fn mark_lost(&mut self) {
        self.state = TrackState::Lost;
    }
}
