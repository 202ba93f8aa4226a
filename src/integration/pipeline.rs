//! TrackerPipeline for combining detection with centroid tracking.

use thiserror::Error;
use tracing::{debug, trace};

use crate::tracker::{
    CentroidTracker, Centroid, Detection, TrackError, TrackerConfig, centroids_of,
};

use super::video::{Frame, FrameSink, FrameSource};
use super::DetectionSource;

/// Per-frame pipeline output: the detections as the backend produced them
/// (boxes, class ids, scores for rendering) and every live track's
/// (id, centroid) pair after association.
#[derive(Debug, Clone)]
pub struct FrameResult {
    pub detections: Vec<Detection>,
    pub tracks: Vec<(u64, Centroid)>,
}

/// Error from a single `process_frame` call.
#[derive(Debug, Error)]
pub enum ProcessError<D> {
    #[error("detection failed: {0}")]
    Detection(D),
    #[error("tracker rejected input: {0}")]
    Tracker(#[from] TrackError),
}

/// Error from driving a full source-to-sink session.
///
/// Each collaborator's failure is reported distinctly; end of input is not
/// an error at all — the source signals it by returning no frame.
#[derive(Debug, Error)]
pub enum PipelineError<D, S, K> {
    #[error("detection failed: {0}")]
    Detection(D),
    #[error("frame source failed: {0}")]
    Source(S),
    #[error("frame sink failed: {0}")]
    Sink(K),
    #[error("tracker rejected input: {0}")]
    Tracker(TrackError),
}

impl<D, S, K> From<ProcessError<D>> for PipelineError<D, S, K> {
    fn from(err: ProcessError<D>) -> Self {
        match err {
            ProcessError::Detection(e) => PipelineError::Detection(e),
            ProcessError::Tracker(e) => PipelineError::Tracker(e),
        }
    }
}

/// A combined tracker that bundles detection inference with centroid
/// tracking.
///
/// Frames must be fed strictly in order: the tracker's state is mutated in
/// place and is the sole input to the next frame's distance comparisons, so
/// the association is order-dependent and not commutative.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: CentroidTracker,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new tracking pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> Result<Self, TrackError> {
        Ok(Self {
            detector,
            tracker: CentroidTracker::new(config)?,
        })
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self {
            detector,
            tracker: CentroidTracker::with_default_config(),
        }
    }

    /// Process a single frame: run detection, reduce the boxes to centroids,
    /// and update the tracker.
    pub fn process_frame(&mut self, frame: &Frame) -> Result<FrameResult, ProcessError<D::Error>> {
        let detections = self
            .detector
            .detect(frame)
            .map_err(ProcessError::Detection)?;
        let centroids = centroids_of(&detections);
        let tracks = self.tracker.update(&centroids)?;
        trace!(
            frame = self.tracker.frame_id(),
            detections = detections.len(),
            tracks = tracks.len(),
            "frame processed"
        );
        Ok(FrameResult { detections, tracks })
    }

    /// Drain a frame source through the pipeline into a sink.
    ///
    /// Each frame is detected, associated, handed to `render` for overlay
    /// drawing, and written to the sink, strictly in source order. When the
    /// source is exhausted the sink is finalized. Returns the number of
    /// frames written.
    pub fn run<S, K, R>(
        &mut self,
        source: &mut S,
        sink: &mut K,
        mut render: R,
    ) -> Result<u64, PipelineError<D::Error, S::Error, K::Error>>
    where
        S: FrameSource,
        K: FrameSink,
        R: FnMut(&mut Frame, &FrameResult),
    {
        let mut frames_written = 0u64;
        loop {
            let Some(mut frame) = source.next_frame().map_err(PipelineError::Source)? else {
                break;
            };
            let result = self.process_frame(&frame)?;
            render(&mut frame, &result);
            sink.write_frame(&frame).map_err(PipelineError::Sink)?;
            frames_written += 1;
        }
        sink.finalize().map_err(PipelineError::Sink)?;
        debug!(frames = frames_written, "source exhausted, output finalized");
        Ok(frames_written)
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut CentroidTracker {
        &mut self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::DetectionBuilder;
    use std::collections::VecDeque;
    use std::convert::Infallible;

    struct ScriptedDetector {
        per_frame: VecDeque<Vec<Detection>>,
    }

    impl DetectionSource for ScriptedDetector {
        type Error = Infallible;

        fn detect(&mut self, _frame: &Frame) -> Result<Vec<Detection>, Self::Error> {
            Ok(self.per_frame.pop_front().unwrap_or_default())
        }
    }

    struct VecSource {
        frames: VecDeque<Frame>,
    }

    impl FrameSource for VecSource {
        type Error = Infallible;

        fn next_frame(&mut self) -> Result<Option<Frame>, Self::Error> {
            Ok(self.frames.pop_front())
        }
    }

    #[derive(Default)]
    struct CollectSink {
        written: Vec<Frame>,
        finalized: bool,
    }

    impl FrameSink for CollectSink {
        type Error = Infallible;

        fn write_frame(&mut self, frame: &Frame) -> Result<(), Self::Error> {
            self.written.push(frame.clone());
            Ok(())
        }

        fn finalize(&mut self) -> Result<(), Self::Error> {
            self.finalized = true;
            Ok(())
        }
    }

    fn det(cx: f32, cy: f32) -> Detection {
        DetectionBuilder::new()
            .xywh(cx, cy, 20.0, 20.0)
            .class_id(0)
            .score(0.9)
            .build()
    }

    #[test]
    fn test_process_frame() {
        let detector = ScriptedDetector {
            per_frame: VecDeque::from([vec![det(100.0, 100.0)]]),
        };
        let mut pipeline = TrackerPipeline::with_default_config(detector);

        let result = pipeline.process_frame(&Frame::default()).unwrap();
        assert_eq!(result.detections.len(), 1);
        assert_eq!(result.tracks, vec![(0, nalgebra::Point2::new(100.0, 100.0))]);
    }

    #[test]
    fn test_run_keeps_identity_and_finalizes() {
        let detector = ScriptedDetector {
            per_frame: VecDeque::from([
                vec![det(100.0, 100.0)],
                vec![det(110.0, 105.0)],
                vec![det(110.0, 105.0), det(500.0, 500.0)],
            ]),
        };
        let mut pipeline = TrackerPipeline::with_default_config(detector);

        let mut source = VecSource {
            frames: VecDeque::from(vec![Frame::new(vec![0u8; 16], 4, 4); 3]),
        };
        let mut sink = CollectSink::default();
        let mut per_frame_tracks = Vec::new();

        let written = pipeline
            .run(&mut source, &mut sink, |_frame, result| {
                per_frame_tracks.push(result.tracks.clone());
            })
            .unwrap();

        assert_eq!(written, 3);
        assert_eq!(sink.written.len(), 3);
        assert!(sink.finalized);

        let ids: Vec<Vec<u64>> = per_frame_tracks
            .iter()
            .map(|tracks| tracks.iter().map(|&(id, _)| id).collect())
            .collect();
        assert_eq!(ids, vec![vec![0], vec![0], vec![0, 1]]);
    }

    #[test]
    fn test_run_finalizes_on_empty_source() {
        let detector = ScriptedDetector {
            per_frame: VecDeque::new(),
        };
        let mut pipeline = TrackerPipeline::with_default_config(detector);

        let mut source = VecSource {
            frames: VecDeque::new(),
        };
        let mut sink = CollectSink::default();
        let written = pipeline.run(&mut source, &mut sink, |_, _| {}).unwrap();

        assert_eq!(written, 0);
        assert!(sink.written.is_empty());
        assert!(sink.finalized);
    }

    #[test]
    fn test_run_reports_source_failure() {
        struct FailingSource;

        impl FrameSource for FailingSource {
            type Error = std::io::Error;

            fn next_frame(&mut self) -> Result<Option<Frame>, Self::Error> {
                Err(std::io::Error::other("decode failed"))
            }
        }

        let detector = ScriptedDetector {
            per_frame: VecDeque::new(),
        };
        let mut pipeline = TrackerPipeline::with_default_config(detector);

        let mut sink = CollectSink::default();
        let err = pipeline
            .run(&mut FailingSource, &mut sink, |_, _| {})
            .unwrap_err();
        assert!(matches!(err, PipelineError::Source(_)));
        assert!(!sink.finalized);
    }
}
