//! Transcript summarization over an OpenAI-compatible chat API.
//!
//! Long transcripts are truncated to the first [`MAX_INPUT_CHARS`] characters
//! and split into fixed-width chunks that are summarized independently.
//! Chunk boundaries are plain character offsets, not sentence boundaries,
//! so a chunk can start or end mid-sentence.

use crate::{
    error::{Result, SumclipError},
    provider::Provider,
};

/// The summarizer only ever sees this many leading characters of a transcript.
const MAX_INPUT_CHARS: usize = 8000;

/// Fixed chunk width, in characters.
const CHUNK_CHARS: usize = 800;

const MIN_SUMMARY_CHARS: usize = 30;
const MAX_SUMMARY_CHARS: usize = 100;

/// Long-lived summarization service. Construct once and reuse; the HTTP
/// client and API key live for the process lifetime.
pub struct Summarizer {
    client: reqwest::Client,
    provider: Provider,
    api_key: String,
}

impl Summarizer {
    pub fn new(provider: Provider) -> Result<Self> {
        let api_key = provider.validate_api_key()?;
        Ok(Self {
            client: reqwest::Client::new(),
            provider,
            api_key,
        })
    }

    /// Summarize a transcript. Each 800-character chunk of the truncated
    /// input yields one bounded-length summary line; lines are joined with
    /// newlines in chunk order.
    pub async fn summarize(&self, text: &str) -> Result<String> {
        let truncated: String = text.chars().take(MAX_INPUT_CHARS).collect();
        let mut summary = String::new();
        for chunk in chunk_text(&truncated, CHUNK_CHARS) {
            let chunk_summary = self.summarize_chunk(&chunk).await?;
            summary.push_str(&chunk_summary);
            summary.push('\n');
        }
        Ok(summary)
    }

    async fn summarize_chunk(&self, chunk: &str) -> Result<String> {
        let config = self.provider.config();
        let system_prompt = format!(
            "You are a lecture summarizer. Summarize the user's text in plain prose, \
             between {MIN_SUMMARY_CHARS} and {MAX_SUMMARY_CHARS} characters. \
             Output ONLY the summary, nothing else."
        );

        let response = self
            .client
            .post(config.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({
                "model": config.model,
                "messages": [
                    {
                        "role": "system",
                        "content": &system_prompt,
                    },
                    {
                        "role": "user",
                        "content": chunk,
                    },
                ],
                "temperature": 0.3,
            }))
            .send()
            .await?
            .json::<serde_json::Value>()
            .await?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| SumclipError::SummarizeFailed {
                reason: format!("Invalid API response: {:?}", response),
            })?;

        Ok(content.trim().to_string())
    }
}

/// Split `text` into fixed-width character chunks. The final chunk may be
/// shorter; concatenating the chunks reproduces `text` exactly.
pub fn chunk_text(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_concatenate_back_to_input() {
        let text = "a".repeat(2500);
        let chunks = chunk_text(&text, CHUNK_CHARS);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn chunk_count_is_ceiling_of_length_over_width() {
        assert_eq!(chunk_text(&"x".repeat(800), 800).len(), 1);
        assert_eq!(chunk_text(&"x".repeat(801), 800).len(), 2);
        assert_eq!(chunk_text(&"x".repeat(2400), 800).len(), 3);
        assert_eq!(chunk_text(&"x".repeat(2401), 800).len(), 4);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk_text("", CHUNK_CHARS).is_empty());
    }

    #[test]
    fn chunking_counts_characters_not_bytes() {
        // 1000 three-byte characters; byte-offset slicing would panic here.
        let text = "語".repeat(1000);
        let chunks = chunk_text(&text, CHUNK_CHARS);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 800);
        assert_eq!(chunks[1].chars().count(), 200);
        assert_eq!(chunks.concat(), text);
    }
}
