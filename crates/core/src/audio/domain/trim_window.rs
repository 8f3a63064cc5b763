/// The [start, end] time range, in seconds on the original recording's
/// timeline, to keep in the final output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrimWindow {
    pub start: f64,
    pub end: f64,
}

impl TrimWindow {
    /// Build a window clamped to `[0, duration]`.
    ///
    /// The guard band applied around detected word boundaries can push the
    /// window past either edge of the file; clamping keeps the trim inside
    /// the recording. Returns None if the clamped window has negative length.
    pub fn clamped(start: f64, end: f64, duration: f64) -> Option<Self> {
        let start = start.max(0.0);
        let end = end.min(duration);
        if end < start {
            return None;
        }
        Some(Self { start, end })
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
