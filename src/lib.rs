//! A minimal centroid-distance multi-object tracker.
//!
//! The `tracker` module holds the core: per-frame association of detected
//! centroids to persistent track identities, using Euclidean distance as the
//! only signal. The `integration` module holds the boundary traits the
//! enclosing program implements (detection backend, frame source, frame sink)
//! and a pipeline that drives them in strict frame order.

pub mod integration;
pub mod tracker;

pub use integration::{
    DetectionBuilder, DetectionSource, Frame, FrameResult, FrameSink, FrameSource, PipelineError,
    ProcessError, TrackerPipeline,
};
pub use tracker::{
    CentroidTracker, Centroid, Detection, Rect, Track, TrackError, TrackState, TrackerConfig,
};
