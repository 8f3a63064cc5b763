pub mod job;
pub mod job_poller;
pub mod token;
pub mod transcription_client;
pub mod word_bounds;
