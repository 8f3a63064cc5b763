use thiserror::Error;

use super::job::JobStatus;
use super::token::RecognizedToken;

#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected status {status} from transcription service")]
    UnexpectedStatus { status: u16 },
    #[error("job {job} has no transcript yet")]
    MissingTranscript { job: String },
    #[error("unparseable token time {value:?}")]
    MalformedTime { value: String },
    #[error("unknown job status {value:?}")]
    UnknownStatus { value: String },
}

/// Domain interface for the asynchronous speech-to-text collaborator.
///
/// Jobs run remotely; starting one returns immediately with its name, and
/// the terminal state is observed through status queries.
pub trait TranscriptionClient: Send {
    /// Start transcribing the audio object at `media_uri`. Returns the fresh
    /// job name without waiting for the job to run.
    fn start_job(&self, media_uri: &str) -> Result<String, TranscribeError>;

    fn job_status(&self, job: &str) -> Result<JobStatus, TranscribeError>;

    /// Location of the result payload; only valid once the job completed.
    fn transcript_uri(&self, job: &str) -> Result<String, TranscribeError>;

    /// Download and parse a completed job's result payload.
    fn fetch_transcript(&self, uri: &str) -> Result<Vec<RecognizedToken>, TranscribeError>;
}
