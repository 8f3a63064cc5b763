use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

use super::job::JobStatus;
use super::transcription_client::{TranscribeError, TranscriptionClient};

#[derive(Error, Debug)]
pub enum PollError {
    #[error("transcription jobs failed: {}", .0.join(", "))]
    JobsFailed(Vec<String>),
    #[error("jobs not terminal after {}s", .waited.as_secs())]
    TimedOut { waited: Duration },
    #[error(transparent)]
    Client(#[from] TranscribeError),
}

/// Blocks until every job reaches a terminal state, round-robining status
/// checks with a fixed sleep between passes.
///
/// The wait is bounded: once `max_wait` elapses with jobs still running,
/// polling stops with `PollError::TimedOut`. Jobs that ended failed surface
/// as `PollError::JobsFailed`, so a caller cannot silently proceed past a
/// failed transcription.
pub struct JobPoller {
    interval: Duration,
    max_wait: Duration,
}

impl JobPoller {
    pub fn new(interval: Duration, max_wait: Duration) -> Self {
        Self { interval, max_wait }
    }

    pub fn await_all(
        &self,
        client: &dyn TranscriptionClient,
        jobs: &[String],
    ) -> Result<(), PollError> {
        let mut settled = vec![false; jobs.len()];
        let mut failed = Vec::new();
        let deadline = Instant::now() + self.max_wait;

        loop {
            for (i, job) in jobs.iter().enumerate() {
                if settled[i] {
                    continue;
                }
                match client.job_status(job)? {
                    JobStatus::Running => {}
                    JobStatus::Completed => settled[i] = true,
                    JobStatus::Failed => {
                        log::warn!("transcription job {job} failed");
                        settled[i] = true;
                        failed.push(job.clone());
                    }
                }
            }

            if settled.iter().all(|s| *s) {
                break;
            }
            if Instant::now() >= deadline {
                return Err(PollError::TimedOut {
                    waited: self.max_wait,
                });
            }
            thread::sleep(self.interval);
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(PollError::JobsFailed(failed))
        }
    }
}
