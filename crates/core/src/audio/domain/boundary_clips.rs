use std::path::PathBuf;

/// The two boundary clips extracted from a raw recording, plus the context
/// needed to map clip-relative timestamps back onto the recording.
#[derive(Clone, Debug)]
pub struct BoundaryClips {
    pub start_clip: PathBuf,
    pub end_clip: PathBuf,
    /// Where the end clip begins, in seconds from the start of the recording.
    pub end_clip_offset: f64,
    /// Total length of the source recording in seconds.
    pub duration: f64,
}
