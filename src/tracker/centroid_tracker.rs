//! The centroid-distance association algorithm.

use nalgebra::distance;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::tracker::error::TrackError;
use crate::tracker::matching::distance_matrix;
use crate::tracker::rect::Centroid;
use crate::tracker::track::Track;
use crate::tracker::track_state::TrackState;

/// Configuration for the centroid tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Maximum Euclidean distance, in pixels, for a detection to continue an
    /// existing track. Strict: a detection at exactly this distance does not
    /// match.
    pub distance_threshold: f32,
    /// When true (the default, matching the historical policy), a track
    /// updated earlier in the same call remains a match candidate for later
    /// detections in that call, measured at its already-updated position.
    /// When false, each track can be claimed at most once per frame.
    pub rematch_within_frame: bool,
    /// Evict a track once it has gone unmatched for more than this many
    /// consecutive frames. `None` (the default) keeps every track forever.
    pub max_missed: Option<u32>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 35.0,
            rematch_within_frame: true,
            max_missed: None,
        }
    }
}

/// Associates detected centroids with persistent track identities across an
/// unbounded sequence of frames.
///
/// All state lives in the instance, so independent trackers (one per video
/// stream) never interfere. Tracks are stored in creation order, which makes
/// the first-match scan order ascending id.
pub struct CentroidTracker {
    tracks: Vec<Track>,
    next_id: u64,
    frame_id: u64,
    config: TrackerConfig,
}

impl CentroidTracker {
    /// Create a tracker, rejecting a non-finite or negative threshold.
    pub fn new(config: TrackerConfig) -> Result<Self, TrackError> {
        if !config.distance_threshold.is_finite() || config.distance_threshold < 0.0 {
            return Err(TrackError::InvalidInput(format!(
                "distance threshold must be finite and non-negative, got {}",
                config.distance_threshold
            )));
        }
        Ok(Self {
            tracks: Vec::new(),
            next_id: 0,
            frame_id: 0,
            config,
        })
    }

    pub fn with_default_config() -> Self {
        Self {
            tracks: Vec::new(),
            next_id: 0,
            frame_id: 0,
            config: TrackerConfig::default(),
        }
    }

    /// Live tracks in ascending-id order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of frames processed so far.
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Associate this frame's centroids with the tracked identities.
    ///
    /// Centroids are processed in input order. Each one scans the tracks in
    /// ascending-id order and claims the first whose stored centroid lies
    /// strictly under the distance threshold; a centroid with no track under
    /// threshold opens a new track with the next id. The returned sequence
    /// holds every live track's (id, centroid) pair in ascending-id order,
    /// including tracks unmatched this frame.
    ///
    /// Fails with [`TrackError::InvalidInput`] on non-finite or negative
    /// coordinates, in which case state is untouched.
    pub fn update(&mut self, centroids: &[Centroid]) -> Result<Vec<(u64, Centroid)>, TrackError> {
        validate_centroids(centroids)?;
        self.frame_id += 1;

        let threshold = self.config.distance_threshold;
        let prior_len = self.tracks.len();
        let mut matched = vec![false; prior_len];
        // Distances against the pre-update state stay valid in one-claim
        // mode because an unclaimed track has not moved this pass.
        let snapshot = if self.config.rematch_within_frame {
            None
        } else {
            Some(distance_matrix(centroids, &self.tracks))
        };

        for (i, &pt) in centroids.iter().enumerate() {
            let claimed = match &snapshot {
                // Historical policy: scan live state, so tracks updated or
                // created earlier in this pass are candidates too.
                None => self
                    .tracks
                    .iter()
                    .position(|t| distance(&pt, &t.last_centroid) < threshold),
                Some(dists) => (0..prior_len).find(|&j| !matched[j] && dists[[i, j]] < threshold),
            };
            match claimed {
                Some(j) => {
                    trace!(
                        frame = self.frame_id,
                        track_id = self.tracks[j].id,
                        x = pt.x,
                        y = pt.y,
                        "matched detection to track"
                    );
                    self.tracks[j].mark_matched(pt);
                    matched[j] = true;
                }
                None => {
                    let id = self.next_id;
                    self.next_id += 1;
                    debug!(frame = self.frame_id, track_id = id, x = pt.x, y = pt.y, "new track");
                    self.tracks.push(Track::new(id, pt));
                    matched.push(true);
                }
            }
        }

        for (j, track) in self.tracks.iter_mut().enumerate() {
            if !matched[j] {
                track.mark_missed();
            }
        }

        if let Some(max_missed) = self.config.max_missed {
            for track in &mut self.tracks {
                if track.missed > max_missed {
                    track.mark_lost();
                }
            }
            self.tracks.retain(|t| {
                if t.state == TrackState::Lost {
                    debug!(frame = self.frame_id, track_id = t.id, "track lost, evicting");
                    false
                } else {
                    true
                }
            });
        }

        Ok(self
            .tracks
            .iter()
            .map(|t| (t.id, t.last_centroid))
            .collect())
    }
}

fn validate_centroids(centroids: &[Centroid]) -> Result<(), TrackError> {
    for (i, pt) in centroids.iter().enumerate() {
        if !(pt.x.is_finite() && pt.y.is_finite()) {
            return Err(TrackError::InvalidInput(format!(
                "centroid {i} has non-finite coordinates ({}, {})",
                pt.x, pt.y
            )));
        }
        if pt.x < 0.0 || pt.y < 0.0 {
            return Err(TrackError::InvalidInput(format!(
                "centroid {i} has negative coordinates ({}, {})",
                pt.x, pt.y
            )));
        }
    }
    Ok(())
}
