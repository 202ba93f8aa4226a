//! Detection input and centroid-distance utilities.

use nalgebra::distance;
use ndarray::Array2;

use crate::tracker::rect::{Centroid, Rect};
use crate::tracker::track::Track;

/// Detection input for the tracker.
///
/// Class id and confidence score pass through for rendering; the association
/// itself uses only the midpoint of the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// Bounding box in TLWH format
    pub bbox: Rect,
    /// Detector class id
    pub class_id: u32,
    /// Detection confidence score
    pub score: f32,
}

impl Detection {
    pub fn new(bbox: Rect, class_id: u32, score: f32) -> Self {
        Self {
            bbox,
            class_id,
            score,
        }
    }

    /// Midpoint of the detection's bounding box.
    pub fn centroid(&self) -> Centroid {
        self.bbox.center()
    }
}

/// Reduce detections to their centroids, preserving input order.
pub fn centroids_of(detections: &[Detection]) -> Vec<Centroid> {
    detections.iter().map(Detection::centroid).collect()
}

/// Pairwise Euclidean distance matrix of shape (P, T), where P is the number
/// of incoming centroids and T the number of existing tracks in the tracker's
/// iteration order.
pub fn distance_matrix(points: &[Centroid], tracks: &[Track]) -> Array2<f32> {
    let mut dists = Array2::zeros((points.len(), tracks.len()));
    for (i, p) in points.iter().enumerate() {
        for (j, t) in tracks.iter().enumerate() {
            dists[[i, j]] = distance(p, &t.last_centroid);
        }
    }
    dists
}
