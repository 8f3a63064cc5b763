pub mod audio;
pub mod pipeline;
pub mod shared;
pub mod storage;
pub mod transcription;
