//! Integration module for connecting detection backends and video I/O with
//! the centroid tracker.
//!
//! The tracker core never decodes, detects, or renders. This module defines
//! the contracts the enclosing program implements for those concerns — a
//! detection backend, a frame source, and a frame sink — plus a pipeline
//! that drives them in strict frame order.

mod builder;
mod detector;
mod pipeline;
mod video;

pub use builder::DetectionBuilder;
pub use detector::DetectionSource;
pub use pipeline::{FrameResult, PipelineError, ProcessError, TrackerPipeline};
pub use video::{Frame, FrameSink, FrameSource};
