mod centroid_tracker;
mod error;
mod matching;
mod rect;
mod track;
mod track_state;

pub use centroid_tracker::{CentroidTracker, TrackerConfig};
pub use error::TrackError;
pub use matching::{Detection, centroids_of, distance_matrix};
pub use rect::{Centroid, Rect};
pub use track::Track;
pub use track_state::TrackState;
