//! Sumclip Core Library
//!
//! Core functionality for transcribing lecture videos with Whisper,
//! summarizing transcripts, and extracting manual or summary-matched clips.

pub mod audio;
pub mod clip;
pub mod error;
pub mod format;
pub mod matcher;
pub mod provider;
pub mod scratch;
pub mod summarize;
pub mod transcribe;
pub mod types;

// Re-export commonly used items at crate root
pub use audio::extract_audio;
pub use clip::{build_summary_video, extract_clip, probe_duration, summary_windows};
pub use error::{Result, SumclipError};
pub use format::{format_timestamp, format_transcript_with_timestamps};
pub use matcher::{match_summary_to_segments, similarity};
pub use provider::{Provider, ProviderConfig};
pub use scratch::ScratchDir;
pub use summarize::{Summarizer, chunk_text};
pub use transcribe::{Transcriber, load_transcript, save_transcript};
pub use types::{ClipRequest, MatchedRange, Segment, Transcript};
