use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SumclipError {
    #[error("Audio extraction failed for {video_path}: {reason}")]
    AudioExtractionFailed { video_path: PathBuf, reason: String },

    #[error("Audio failed to load from {audio_path}; file may be corrupted or silent")]
    AudioUnreadable { audio_path: PathBuf },

    #[error("Failed to load speech model from {model_path}: {reason}")]
    ModelLoadFailed { model_path: PathBuf, reason: String },

    #[error("Transcription failed for {audio_path}: {reason}")]
    TranscribeFailed { audio_path: PathBuf, reason: String },

    #[error("Summarization failed: {reason}")]
    SummarizeFailed { reason: String },

    #[error("Invalid clip range: start ({start}s) must be less than end ({end}s)")]
    InvalidClipRange { start: f64, end: f64 },

    #[error("Clip extraction failed for {video_path}: {reason}")]
    ClipFailed { video_path: PathBuf, reason: String },

    #[error("Probe failed for {video_path}: {reason}")]
    ProbeFailed { video_path: PathBuf, reason: String },

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SumclipError>;
