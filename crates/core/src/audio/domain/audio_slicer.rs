use std::path::{Path, PathBuf};

use thiserror::Error;

use super::boundary_clips::BoundaryClips;
use super::trim_window::TrimWindow;

#[derive(Error, Debug)]
pub enum SliceError {
    #[error("wav error in {path}: {source}")]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
    #[error("io error in {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input too short: {frames} frames, boundary extraction needs at least {required}")]
    InputTooShort { frames: u32, required: u32 },
    #[error("frame range [{start}, {end}) out of bounds for {total_frames}-frame file")]
    RangeOutOfBounds {
        start: i64,
        end: i64,
        total_frames: u32,
    },
    #[error("unsupported sample format: {bits} bits per sample")]
    UnsupportedFormat { bits: u16 },
}

/// Domain interface for frame-accurate WAV slicing.
///
/// Every derived clip carries the source's sample rate, channel count and
/// sample width verbatim; only the frame range differs.
pub trait AudioSlicer: Send {
    /// Extract the first and last boundary clips of a recording to the given
    /// paths, returning the end clip's offset and the source duration.
    fn extract_boundary_clips(
        &self,
        input: &Path,
        start_out: &Path,
        end_out: &Path,
    ) -> Result<BoundaryClips, SliceError>;

    /// Copy the frames covered by `window` into a new container at `output`.
    fn trim(&self, input: &Path, output: &Path, window: TrimWindow) -> Result<(), SliceError>;
}
