/// Track state enumeration for the identity lifecycle.
///
/// With eviction disabled (the default policy) every track stays `Active`
/// forever once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Live track: matched this frame, or still within the miss budget
    #[default]
    Active,
    /// Unmatched past the configured miss budget; removed from state at the
    /// end of the update that marked it
    Lost,
}
