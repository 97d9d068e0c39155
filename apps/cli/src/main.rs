use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use sumclip_core::{
    ClipRequest, Provider, ScratchDir, Summarizer, Transcriber, build_summary_video, extract_audio,
    extract_clip, format_timestamp, format_transcript_with_timestamps, match_summary_to_segments,
    save_transcript,
};

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "webm"];

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Grok,
    Openai,
    Gemini,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Grok => Provider::Grok,
            CliProvider::Openai => Provider::Openai,
            CliProvider::Gemini => Provider::Gemini,
        }
    }
}

#[derive(Parser)]
#[command(name = "sumclip")]
#[command(
    about = "Transcribe a lecture video with Whisper, summarize it, and extract manual or AI summary clips"
)]
struct Cli {
    /// Path to the lecture video (mp4/mov/avi/webm)
    video: PathBuf,

    /// Path to a ggml Whisper model file
    #[arg(short, long, default_value = "ggml-base.bin")]
    model: PathBuf,

    /// AI provider for summarization
    #[arg(short, long, default_value = "grok")]
    provider: CliProvider,

    /// Extract a manual clip as start:end in seconds, e.g. 30:95.5
    #[arg(short, long, value_name = "START:END")]
    clip: Option<String>,

    /// Assemble an AI summary clip from the summary text
    #[arg(short, long)]
    summary_clip: bool,

    /// Keep the run's scratch directory (intermediate audio and parts)
    #[arg(short, long)]
    keep: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), message);
    std::process::exit(1);
}

fn parse_clip_arg(raw: &str) -> Result<ClipRequest, String> {
    let (start, end) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got {raw:?}"))?;
    let start: f64 = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid start time {start:?}"))?;
    let end: f64 = end
        .trim()
        .parse()
        .map_err(|_| format!("invalid end time {end:?}"))?;
    ClipRequest::new(start, end).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let provider: Provider = cli.provider.into();

    // Validate everything user-supplied before any processing starts.
    let extension = cli
        .video
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());
    if !extension.is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str())) {
        fail(format!(
            "unsupported video container for {}; expected one of {}",
            cli.video.display(),
            VIDEO_EXTENSIONS.join("/")
        ));
    }
    if !cli.video.exists() {
        fail(format!("video file not found: {}", cli.video.display()));
    }
    let clip_request = cli
        .clip
        .as_deref()
        .map(|raw| parse_clip_arg(raw).unwrap_or_else(|e| fail(e)));
    let summarizer = match Summarizer::new(provider) {
        Ok(s) => s,
        Err(e) => fail(e),
    };

    println!(
        "\n{}  {}\n",
        style("sumclip").cyan().bold(),
        style("Lecture Video Summarizer").dim()
    );

    // One scratch dir per run; removed on exit unless --keep.
    let mut scratch = ScratchDir::create()?;
    if cli.keep {
        scratch.keep();
    }

    // Step 1: Extract audio
    let spinner = create_spinner("Extracting audio...");
    let audio_path = scratch.audio_path();
    extract_audio(&cli.video, &audio_path).await?;
    spinner.finish_with_message(format!("{} Audio extracted", style("✓").green().bold()));

    // Step 2: Transcribe
    let spinner = create_spinner("Loading Whisper model...");
    let transcriber = Transcriber::new(&cli.model)?;
    spinner.set_message("Transcribing with Whisper...");
    let transcript = transcriber.transcribe(&audio_path)?;
    save_transcript(&transcript, &scratch.transcript_path()).await?;
    let duration_mins = transcript
        .segments
        .last()
        .map(|s| s.end / 60.0)
        .unwrap_or(0.0);
    spinner.finish_with_message(format!(
        "{} Transcribed: {:.1} min, {} detected",
        style("✓").green().bold(),
        duration_mins,
        style(&transcript.language).yellow()
    ));

    fs::write("transcript.txt", &transcript.text).await?;
    println!(
        "{} {}",
        style("Saved:").dim(),
        style("transcript.txt").cyan()
    );

    // Step 3: Summarize. A failure here still leaves transcript.txt on disk.
    let spinner = create_spinner("Generating summary...");
    let summary = summarizer.summarize(&transcript.text).await?;
    spinner.finish_with_message(format!("{} Summary generated", style("✓").green().bold()));

    fs::write("summary.txt", &summary).await?;
    println!("{} {}", style("Saved:").dim(), style("summary.txt").cyan());

    // Show which parts of the video the summary text maps back to.
    let ranges = match_summary_to_segments(&summary, &transcript.segments);
    if !ranges.is_empty() {
        println!("\n{}", style("Summary coverage:").bold());
        for range in &ranges {
            println!(
                "  {}–{}",
                format_timestamp(range.start),
                format_timestamp(range.end)
            );
        }
    }

    // Step 4: Manual clip
    if let Some(request) = clip_request {
        let spinner = create_spinner("Extracting clip...");
        let output_path = PathBuf::from("clip.mp4");
        extract_clip(&cli.video, request, &output_path).await?;
        spinner.finish_with_message(format!(
            "{} Clip saved: {}",
            style("✓").green().bold(),
            style(output_path.display()).cyan()
        ));
    }

    // Step 5: AI summary clip
    if cli.summary_clip {
        let spinner = create_spinner("Assembling AI summary clip...");
        match build_summary_video(&cli.video, &transcript.text, &summary, &scratch).await? {
            Some(built) => {
                let output_path = PathBuf::from("summary_clip.mp4");
                fs::copy(&built, &output_path).await?;
                spinner.finish_with_message(format!(
                    "{} Summary clip saved: {}",
                    style("✓").green().bold(),
                    style(output_path.display()).cyan()
                ));
            }
            None => {
                spinner.finish_with_message(format!(
                    "{} No matching segments found for the summary",
                    style("⚠").yellow().bold()
                ));
            }
        }
    }

    println!("\n{}", style("─".repeat(60)).dim());
    println!("{}", format_transcript_with_timestamps(&transcript));
    println!("\n{}", style("Summary").bold());
    println!("{summary}");

    Ok(())
}
