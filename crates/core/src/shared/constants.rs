/// Length of each boundary clip sampled for transcription.
pub const BOUNDARY_CLIP_SECONDS: u32 = 120;

/// Margin kept around detected word boundaries so speech onsets and decays
/// are not clipped.
pub const GUARD_BAND_SECONDS: f64 = 2.5;

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_MAX_WAIT_SECS: u64 = 1800;

pub const START_CLIP_KEY: &str = "start_clip.wav";
pub const END_CLIP_KEY: &str = "end_clip.wav";

pub const DEFAULT_START_CLIP_FILE: &str = "first.wav";
pub const DEFAULT_END_CLIP_FILE: &str = "second.wav";
pub const DEFAULT_OUTPUT_FILE: &str = "output.wav";

pub const MEDIA_FORMAT: &str = "wav";
pub const LANGUAGE_CODE: &str = "en-US";
