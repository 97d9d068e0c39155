use crate::types::Transcript;

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

/// Format transcript segments with timestamps
pub fn format_transcript_with_timestamps(transcript: &Transcript) -> String {
    transcript
        .segments
        .iter()
        .map(|seg| format!("[{}] {}", format_timestamp(seg.start), seg.text.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Segment;

    #[test]
    fn timestamp_formats_as_mm_ss() {
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(59.9), "00:59");
        assert_eq!(format_timestamp(75.0), "01:15");
        assert_eq!(format_timestamp(3599.0), "59:59");
    }

    #[test]
    fn transcript_lines_carry_start_timestamps() {
        let transcript = Transcript {
            text: "hello world".to_string(),
            segments: vec![
                Segment {
                    start: 0.0,
                    end: 2.0,
                    text: " hello ".to_string(),
                },
                Segment {
                    start: 62.0,
                    end: 65.0,
                    text: "world".to_string(),
                },
            ],
            language: "en".to_string(),
        };
        assert_eq!(
            format_transcript_with_timestamps(&transcript),
            "[00:00] hello\n[01:02] world"
        );
    }
}
