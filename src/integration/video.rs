//! Frame source and sink contracts for the enclosing video pipeline.

/// One decoded video frame: an opaque pixel buffer with its dimensions.
///
/// The tracker never inspects the pixels; the buffer only flows from the
/// source, through the detector and the caller's renderer, to the sink.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

/// A finite, ordered, non-restartable sequence of decoded frames.
pub trait FrameSource {
    /// Error type for decode failures.
    type Error;

    /// The next frame in order.
    ///
    /// `Ok(None)` signals end of sequence; a decode failure is reported as
    /// `Err`, never conflated with exhaustion.
    fn next_frame(&mut self) -> Result<Option<Frame>, Self::Error>;
}

/// Destination for rendered frames, written in source order.
pub trait FrameSink {
    /// Error type for write failures.
    type Error;

    fn write_frame(&mut self, frame: &Frame) -> Result<(), Self::Error>;

    /// Flush and close the output so it is a valid playable artifact.
    /// Must be called once after the last frame.
    fn finalize(&mut self) -> Result<(), Self::Error>;
}
