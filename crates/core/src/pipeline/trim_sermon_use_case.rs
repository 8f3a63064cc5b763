use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::audio::domain::audio_slicer::{AudioSlicer, SliceError};
use crate::audio::domain::trim_window::TrimWindow;
use crate::shared::constants::{
    DEFAULT_END_CLIP_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_START_CLIP_FILE, END_CLIP_KEY,
    GUARD_BAND_SECONDS, START_CLIP_KEY,
};
use crate::storage::domain::object_store::{ObjectStore, StorageError};
use crate::transcription::domain::job_poller::{JobPoller, PollError};
use crate::transcription::domain::token::RecognizedToken;
use crate::transcription::domain::transcription_client::{TranscribeError, TranscriptionClient};
use crate::transcription::domain::word_bounds::{earliest_word_start, latest_word_end};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Slice(#[from] SliceError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Transcribe(#[from] TranscribeError),
    #[error(transparent)]
    Poll(#[from] PollError),
    #[error("no spoken words recognized in the {clip} clip")]
    EmptyTranscript { clip: &'static str },
    #[error("computed trim window [{start:.1}s, {end:.1}s] is empty")]
    InvalidWindow { start: f64, end: f64 },
}

/// Where the intermediate clips and the final trim are written.
#[derive(Clone, Debug)]
pub struct TrimOptions {
    pub start_clip: PathBuf,
    pub end_clip: PathBuf,
    pub output: PathBuf,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            start_clip: PathBuf::from(DEFAULT_START_CLIP_FILE),
            end_clip: PathBuf::from(DEFAULT_END_CLIP_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Sequences the whole trim: slice boundary clips, upload them, transcribe
/// both, poll the jobs to terminal state, locate the first and last spoken
/// words, and trim the raw recording over the guarded window.
pub struct TrimSermonUseCase {
    slicer: Box<dyn AudioSlicer>,
    store: Box<dyn ObjectStore>,
    client: Box<dyn TranscriptionClient>,
    poller: JobPoller,
}

impl TrimSermonUseCase {
    pub fn new(
        slicer: Box<dyn AudioSlicer>,
        store: Box<dyn ObjectStore>,
        client: Box<dyn TranscriptionClient>,
        poller: JobPoller,
    ) -> Self {
        Self {
            slicer,
            store,
            client,
            poller,
        }
    }

    pub fn run(&self, input: &Path, opts: &TrimOptions) -> Result<TrimWindow, PipelineError> {
        // 1. Slice the boundary clips off the raw recording.
        log::info!("extracting start and end clips from {}", input.display());
        let clips = self
            .slicer
            .extract_boundary_clips(input, &opts.start_clip, &opts.end_clip)?;

        // 2. Upload both clips, keeping the stored URIs for the job starts.
        log::info!("uploading boundary clips");
        let start_uri = self.store.put(&clips.start_clip, START_CLIP_KEY)?;
        let end_uri = self.store.put(&clips.end_clip, END_CLIP_KEY)?;

        // 3. Start one transcription job per clip.
        log::info!("starting transcription jobs");
        let start_job = self.client.start_job(&start_uri)?;
        let end_job = self.client.start_job(&end_uri)?;

        // 4. Wait for both jobs; a failed job aborts here rather than
        //    surfacing later as a missing transcript.
        log::info!("waiting for transcription jobs to complete");
        self.poller
            .await_all(self.client.as_ref(), &[start_job.clone(), end_job.clone()])?;

        // 5. Locate the first and last spoken words and widen by the guard
        //    band, clamped to the recording.
        let first_word = earliest_word_start(&self.transcript(&start_job)?)
            .ok_or(PipelineError::EmptyTranscript { clip: "start" })?;
        let last_word = latest_word_end(&self.transcript(&end_job)?)
            .ok_or(PipelineError::EmptyTranscript { clip: "end" })?;

        let start = first_word - GUARD_BAND_SECONDS;
        let end = clips.end_clip_offset + last_word + GUARD_BAND_SECONDS;
        let window = TrimWindow::clamped(start, end, clips.duration)
            .ok_or(PipelineError::InvalidWindow { start, end })?;
        log::info!("sermon spans {:.1}s to {:.1}s", window.start, window.end);

        // 6. Trim the raw recording over the window.
        self.slicer.trim(input, &opts.output, window)?;
        log::info!("trimmed output written to {}", opts.output.display());
        Ok(window)
    }

    fn transcript(&self, job: &str) -> Result<Vec<RecognizedToken>, TranscribeError> {
        let uri = self.client.transcript_uri(job)?;
        self.client.fetch_transcript(&uri)
    }
}
