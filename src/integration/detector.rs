//! Trait for object detection inference backends.

use crate::integration::video::Frame;
use crate::tracker::Detection;

/// Trait for object detection inference backends.
///
/// Implement this to connect any detection model to the tracker. The backend
/// is a black box to the tracking core: it only has to turn one frame into
/// zero or more bounding boxes.
///
/// # Example
///
/// ```ignore
/// use centroidtrack_rs::{Detection, DetectionSource, Frame};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Self::Error> {
///         // Run inference and return detections
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on one decoded frame and return its detections.
    /// An empty vector is a valid result: nothing detected this frame.
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Self::Error>;
}
