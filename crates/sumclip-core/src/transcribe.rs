//! Speech-to-text over a local Whisper model.

use std::path::Path;

use tokio::fs;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::{
    error::{Result, SumclipError},
    types::{Segment, Transcript},
};

/// Long-lived transcription service wrapping a loaded Whisper model.
///
/// Model load is the expensive part; the orchestrator constructs this once
/// and reuses it for every request in the process.
pub struct Transcriber {
    ctx: WhisperContext,
}

impl Transcriber {
    pub fn new(model_path: &Path) -> Result<Self> {
        let ctx_params = WhisperContextParameters {
            use_gpu: true,
            ..Default::default()
        };
        let model_path_str =
            model_path
                .to_str()
                .ok_or_else(|| SumclipError::ModelLoadFailed {
                    model_path: model_path.to_path_buf(),
                    reason: "model path is not valid UTF-8".to_string(),
                })?;
        let ctx = WhisperContext::new_with_params(model_path_str, ctx_params).map_err(|e| {
            SumclipError::ModelLoadFailed {
                model_path: model_path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { ctx })
    }

    /// Transcribe a mono 16kHz PCM WAV file into full text plus ordered
    /// timestamped segments.
    pub fn transcribe(&self, audio_path: &Path) -> Result<Transcript> {
        let samples = load_samples(audio_path)?;

        let fail = |reason: String| SumclipError::TranscribeFailed {
            audio_path: audio_path.to_path_buf(),
            reason,
        };

        let params = FullParams::new(SamplingStrategy::Greedy { best_of: 5 });
        let mut state = self
            .ctx
            .create_state()
            .map_err(|e| fail(format!("failed to create state: {e}")))?;
        state
            .full(params, &samples)
            .map_err(|e| fail(format!("failed to run model: {e}")))?;

        let mut text = String::new();
        let mut segments: Vec<Segment> = Vec::new();

        for segment in state.as_iter() {
            let seg_text = match segment.to_str() {
                Ok(s) => s,
                Err(_) => continue,
            };
            // Whisper timestamps are centiseconds.
            segments.push(Segment {
                start: segment.start_timestamp() as f64 / 100.0,
                end: segment.end_timestamp() as f64 / 100.0,
                text: seg_text.to_string(),
            });
            text.push_str(seg_text);
        }

        let language_index = state.full_lang_id_from_state();
        let language = whisper_rs::get_lang_str(language_index);

        Ok(Transcript {
            text,
            segments,
            language: language.unwrap_or("Unknown").to_string(),
        })
    }
}

/// Load WAV samples as normalized f32. An unreadable or empty file is the
/// user-facing "corrupted or silent" case, not a low-level decode error.
fn load_samples(audio_path: &Path) -> Result<Vec<f32>> {
    let unreadable = || SumclipError::AudioUnreadable {
        audio_path: audio_path.to_path_buf(),
    };

    let mut reader = hound::WavReader::open(audio_path).map_err(|_| unreadable())?;
    let samples: Vec<f32> = reader
        .samples::<i16>()
        .map(|s| s.map(|v| v as f32 / i16::MAX as f32))
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| unreadable())?;

    if samples.is_empty() {
        return Err(unreadable());
    }
    Ok(samples)
}

/// Persist a transcript as JSON in the run's scratch dir.
pub async fn save_transcript(transcript: &Transcript, path: &Path) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(transcript)?).await?;
    Ok(())
}

pub async fn load_transcript(path: &Path) -> Result<Transcript> {
    let json_content = fs::read_to_string(path).await?;
    let transcript: Transcript = serde_json::from_str(&json_content)?;
    Ok(transcript)
}
