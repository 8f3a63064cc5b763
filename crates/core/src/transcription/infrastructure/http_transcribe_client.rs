use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::config::CloudConfig;
use crate::shared::constants::{LANGUAGE_CODE, MEDIA_FORMAT};
use crate::transcription::domain::job::JobStatus;
use crate::transcription::domain::token::RecognizedToken;
use crate::transcription::domain::transcription_client::{TranscribeError, TranscriptionClient};

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize)]
struct StartJobRequest<'a> {
    job_name: &'a str,
    media_uri: &'a str,
    media_format: &'a str,
    language_code: &'a str,
}

#[derive(Deserialize)]
struct JobResponse {
    status: String,
    #[serde(default)]
    transcript_uri: Option<String>,
}

#[derive(Deserialize)]
struct TranscriptPayload {
    results: TranscriptResults,
}

#[derive(Deserialize)]
struct TranscriptResults {
    items: Vec<TranscriptItem>,
}

/// One recognized item as the service serializes it: times are decimal
/// strings and absent on punctuation items.
#[derive(Deserialize)]
struct TranscriptItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    start_time: Option<String>,
    #[serde(default)]
    end_time: Option<String>,
}

/// Speech-to-text collaborator reached over plain HTTP.
///
/// Jobs are started with a client-generated UUID name against
/// `POST {endpoint}/jobs` and observed through `GET {endpoint}/jobs/{name}`.
pub struct HttpTranscribeClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

impl HttpTranscribeClient {
    pub fn new(config: &CloudConfig) -> Result<Self, TranscribeError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.transcribe_endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn job(&self, job: &str) -> Result<JobResponse, TranscribeError> {
        let response = self
            .http
            .get(format!("{}/jobs/{job}", self.endpoint))
            .bearer_auth(&self.api_key)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(TranscribeError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
        Ok(response.json()?)
    }
}

impl TranscriptionClient for HttpTranscribeClient {
    fn start_job(&self, media_uri: &str) -> Result<String, TranscribeError> {
        let job_name = Uuid::new_v4().to_string();
        let request = StartJobRequest {
            job_name: &job_name,
            media_uri,
            media_format: MEDIA_FORMAT,
            language_code: LANGUAGE_CODE,
        };
        let response = self
            .http
            .post(format!("{}/jobs", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(TranscribeError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
        log::debug!("started transcription job {job_name} for {media_uri}");
        Ok(job_name)
    }

    fn job_status(&self, job: &str) -> Result<JobStatus, TranscribeError> {
        parse_status(&self.job(job)?.status)
    }

    fn transcript_uri(&self, job: &str) -> Result<String, TranscribeError> {
        self.job(job)?
            .transcript_uri
            .ok_or_else(|| TranscribeError::MissingTranscript {
                job: job.to_string(),
            })
    }

    fn fetch_transcript(&self, uri: &str) -> Result<Vec<RecognizedToken>, TranscribeError> {
        let response = self.http.get(uri).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(TranscribeError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
        let payload: TranscriptPayload = response.json()?;
        parse_tokens(payload)
    }
}

fn parse_status(value: &str) -> Result<JobStatus, TranscribeError> {
    match value {
        "RUNNING" => Ok(JobStatus::Running),
        "COMPLETED" => Ok(JobStatus::Completed),
        "FAILED" => Ok(JobStatus::Failed),
        other => Err(TranscribeError::UnknownStatus {
            value: other.to_string(),
        }),
    }
}

fn parse_tokens(payload: TranscriptPayload) -> Result<Vec<RecognizedToken>, TranscribeError> {
    payload.results.items.into_iter().map(parse_item).collect()
}

fn parse_item(item: TranscriptItem) -> Result<RecognizedToken, TranscribeError> {
    // Punctuation items carry no times; they are never used for word
    // boundaries, so zero stands in.
    let start_time = parse_time(item.start_time)?;
    let end_time = parse_time(item.end_time)?;
    let token = if item.kind == "punctuation" {
        RecognizedToken::punctuation(start_time, end_time)
    } else {
        RecognizedToken::word(start_time, end_time)
    };
    Ok(token)
}

fn parse_time(value: Option<String>) -> Result<f64, TranscribeError> {
    match value {
        None => Ok(0.0),
        Some(v) => v
            .parse::<f64>()
            .map_err(|_| TranscribeError::MalformedTime { value: v }),
    }
}
