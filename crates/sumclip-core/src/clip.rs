//! Clip extraction and summary-clip assembly.
//!
//! Two alignment strategies coexist here on purpose. Manual clips cut an
//! exact user-given window. The summary clip uses a sentence-index heuristic:
//! the transcript is split into sentences and each sentence is assumed to
//! occupy an equal fraction of the video's duration, with no use of the
//! segment-level timestamps the matcher works from.

use std::path::{Path, PathBuf};

use tokio::{fs, process::Command};

use crate::{
    error::{Result, SumclipError},
    matcher::similarity,
    scratch::ScratchDir,
    types::ClipRequest,
};

/// Ratio above which a transcript sentence counts as covered by the summary.
const SENTENCE_SIMILARITY_THRESHOLD: f64 = 0.5;

/// Get a video's duration in seconds via ffprobe.
pub async fn probe_duration(video_path: &Path) -> Result<f64> {
    let output = Command::new("ffprobe")
        .arg("-v")
        .arg("quiet")
        .arg("-print_format")
        .arg("json")
        .arg("-show_format")
        .arg(video_path)
        .output()
        .await?;

    if !output.status.success() {
        return Err(SumclipError::ProbeFailed {
            video_path: video_path.to_path_buf(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    json["format"]["duration"]
        .as_str()
        .and_then(|d| d.parse::<f64>().ok())
        .ok_or_else(|| SumclipError::ProbeFailed {
            video_path: video_path.to_path_buf(),
            reason: "no duration in ffprobe output".to_string(),
        })
}

/// Cut one time window with a re-encode to H.264/AAC.
async fn cut_window(video_path: &Path, start: f64, end: f64, output_path: &Path) -> Result<()> {
    let output = Command::new("ffmpeg")
        .arg("-ss")
        .arg(format!("{start:.3}"))
        .arg("-to")
        .arg(format!("{end:.3}"))
        .arg("-i")
        .arg(video_path)
        .arg("-c:v")
        .arg("libx264")
        .arg("-c:a")
        .arg("aac")
        .arg("-y")
        .arg(output_path)
        .output()
        .await?;

    if !output.status.success() {
        return Err(SumclipError::ClipFailed {
            video_path: video_path.to_path_buf(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(())
}

/// Extract a manually requested clip. The range is validated at
/// [`ClipRequest`] construction, before ffmpeg is ever invoked.
pub async fn extract_clip(
    video_path: &Path,
    request: ClipRequest,
    output_path: &Path,
) -> Result<()> {
    cut_window(video_path, request.start, request.end, output_path).await
}

/// Uniform sentence windows of the video that the summary covers.
///
/// Sentence `i` of `n` is assumed to span `[i*d/n, (i+1)*d/n)` of a
/// `d`-second video. A window qualifies when any summary sentence scores
/// above [`SENTENCE_SIMILARITY_THRESHOLD`] against the transcript sentence.
/// Windows come back in sentence order, neither deduplicated nor merged.
pub fn summary_windows(transcript: &str, summary: &str, duration: f64) -> Vec<(f64, f64)> {
    let sentences: Vec<&str> = transcript.split(". ").collect();
    let summary_sentences: Vec<&str> = summary.split(". ").collect();
    let per_sentence = duration / sentences.len() as f64;

    sentences
        .iter()
        .enumerate()
        .filter(|(_, sentence)| {
            summary_sentences
                .iter()
                .any(|summ| similarity(sentence, summ) > SENTENCE_SIMILARITY_THRESHOLD)
        })
        .map(|(i, _)| {
            let start = i as f64 * per_sentence;
            let end = ((i + 1) as f64 * per_sentence).min(duration);
            (start, end)
        })
        .collect()
}

/// Assemble the AI summary clip: cut every qualifying sentence window and
/// concatenate them in order. Returns `Ok(None)` when no window qualifies,
/// which is a reportable outcome rather than an error.
pub async fn build_summary_video(
    video_path: &Path,
    transcript_text: &str,
    summary_text: &str,
    scratch: &ScratchDir,
) -> Result<Option<PathBuf>> {
    let duration = probe_duration(video_path).await?;
    let windows = summary_windows(transcript_text, summary_text, duration);
    if windows.is_empty() {
        return Ok(None);
    }

    let mut part_paths = Vec::with_capacity(windows.len());
    for (i, (start, end)) in windows.into_iter().enumerate() {
        let part_path = scratch.part_path(i);
        cut_window(video_path, start, end, &part_path).await?;
        part_paths.push(part_path);
    }

    let output_path = scratch.summary_clip_path();
    concat_parts(&part_paths, &output_path, video_path).await?;
    Ok(Some(output_path))
}

/// Concatenate uniformly encoded part files with the ffmpeg concat demuxer.
async fn concat_parts(parts: &[PathBuf], output_path: &Path, video_path: &Path) -> Result<()> {
    let list_path = output_path.with_extension("txt");
    let mut list = String::new();
    for part in parts {
        // Single quotes in paths must be escaped for the concat demuxer.
        let escaped = part.to_string_lossy().replace('\'', "'\\''");
        list.push_str(&format!("file '{escaped}'\n"));
    }
    fs::write(&list_path, list).await?;

    let output = Command::new("ffmpeg")
        .arg("-f")
        .arg("concat")
        .arg("-safe")
        .arg("0")
        .arg("-i")
        .arg(&list_path)
        .arg("-c")
        .arg("copy")
        .arg("-y")
        .arg(output_path)
        .output()
        .await?;

    if !output.status.success() {
        return Err(SumclipError::ClipFailed {
            video_path: video_path.to_path_buf(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_similar_sentence_window_is_selected() {
        let transcript =
            "today we begin. gradient descent explained. lunch break now. questions and answers";
        let windows = summary_windows(transcript, "gradient descent explained", 100.0);
        assert_eq!(windows, vec![(25.0, 50.0)]);
    }

    #[test]
    fn unrelated_summary_selects_no_windows() {
        let transcript =
            "today we begin. gradient descent explained. lunch break now. questions and answers";
        assert!(summary_windows(transcript, "totally unrelated topic", 100.0).is_empty());
    }

    #[test]
    fn windows_are_clamped_to_duration() {
        let windows = summary_windows("one lone sentence", "one lone sentence", 37.5);
        assert_eq!(windows, vec![(0.0, 37.5)]);
    }

    #[test]
    fn windows_keep_sentence_order() {
        let transcript = "gradient descent explained. lunch break now. gradient descent explained";
        let windows = summary_windows(transcript, "gradient descent explained", 90.0);
        assert_eq!(windows, vec![(0.0, 30.0), (60.0, 90.0)]);
    }

    #[test]
    fn empty_transcript_selects_no_windows() {
        assert!(summary_windows("", "some summary text", 60.0).is_empty());
    }
}
