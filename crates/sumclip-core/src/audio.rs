use std::path::Path;

use tokio::process::Command;

use crate::error::{Result, SumclipError};

/// Extract the audio track from a video as mono 16kHz 16-bit PCM WAV.
///
/// A transcoder failure surfaces as an error here; a decodable-but-empty
/// output is caught by the transcriber's load check instead.
pub async fn extract_audio(video_path: &Path, audio_path: &Path) -> Result<()> {
    let output = Command::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg(video_path)
        .arg("-vn")
        .arg("-acodec")
        .arg("pcm_s16le")
        .arg("-ar")
        .arg("16000")
        .arg("-ac")
        .arg("1")
        .arg(audio_path)
        .output()
        .await?;

    if !output.status.success() {
        return Err(SumclipError::AudioExtractionFailed {
            video_path: video_path.to_path_buf(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(())
}
