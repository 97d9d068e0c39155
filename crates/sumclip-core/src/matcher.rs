//! Aligns a free-text summary with timestamped transcript segments.
//!
//! A segment counts as matched when its text is close enough to the whole
//! summary by edit distance, or when it shares any word with the summary.
//! The word check deliberately favors recall over precision: a single short
//! shared word is enough.

use crate::types::{MatchedRange, Segment};

/// Ratio above which a segment is considered similar to the summary.
const SIMILARITY_THRESHOLD: f64 = 0.3;

/// Maximum gap, in seconds, between matched segments that still merge
/// into one range.
const MERGE_GAP_SECONDS: f64 = 2.0;

/// Case-insensitive normalized Levenshtein ratio in [0, 1].
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

fn segment_matches(summary: &str, segment_text: &str) -> bool {
    if similarity(summary, segment_text) > SIMILARITY_THRESHOLD {
        return true;
    }
    let seg_lower = segment_text.to_lowercase();
    summary
        .to_lowercase()
        .split_whitespace()
        .any(|word| seg_lower.contains(word))
}

/// Compute the merged time ranges of the video that correspond to the summary.
///
/// Ranges come back chronological and disjoint; adjacent matched segments
/// whose gap is at most [`MERGE_GAP_SECONDS`] collapse into one range.
/// Returns an empty list when nothing matches.
pub fn match_summary_to_segments(summary: &str, segments: &[Segment]) -> Vec<MatchedRange> {
    let matched: Vec<(f64, f64)> = segments
        .iter()
        .filter(|seg| segment_matches(summary, &seg.text))
        .map(|seg| (seg.start, seg.end))
        .collect();

    let Some(&(first_start, first_end)) = matched.first() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    let (mut current_start, mut current_end) = (first_start, first_end);

    for &(start, end) in &matched[1..] {
        if start - current_end <= MERGE_GAP_SECONDS {
            current_end = end;
        } else {
            merged.push(MatchedRange {
                start: current_start,
                end: current_end,
            });
            (current_start, current_end) = (start, end);
        }
    }

    merged.push(MatchedRange {
        start: current_start,
        end: current_end,
    });
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f64, end: f64, text: &str) -> Segment {
        Segment {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn similarity_is_symmetric_and_bounded() {
        let pairs = [
            ("machine learning", "lunch break"),
            ("today we cover", "more on learning"),
            ("", "nonempty"),
        ];
        for (a, b) in pairs {
            let forward = similarity(a, b);
            let backward = similarity(b, a);
            assert_eq!(forward, backward);
            assert!((0.0..=1.0).contains(&forward));
        }
    }

    #[test]
    fn similarity_of_identical_strings_is_one() {
        assert_eq!(similarity("neural networks", "neural networks"), 1.0);
    }

    #[test]
    fn similarity_ignores_case() {
        assert_eq!(similarity("Deep Learning", "deep learning"), 1.0);
    }

    #[test]
    fn empty_segments_yield_empty_result() {
        assert!(match_summary_to_segments("anything at all", &[]).is_empty());
    }

    #[test]
    fn no_match_yields_empty_result() {
        let segments = [seg(0.0, 5.0, "xyzzy qwerty")];
        assert!(match_summary_to_segments("完全に違う", &segments).is_empty());
    }

    #[test]
    fn single_matched_segment_yields_single_range() {
        let segments = [seg(3.0, 8.0, "introduction to rust programming")];
        let ranges = match_summary_to_segments("rust programming", &segments);
        assert_eq!(ranges, vec![MatchedRange { start: 3.0, end: 8.0 }]);
    }

    #[test]
    fn segments_within_two_seconds_merge() {
        let segments = [
            seg(0.0, 5.0, "we discuss gradient descent"),
            seg(7.0, 12.0, "gradient descent converges"),
        ];
        let ranges = match_summary_to_segments("gradient descent", &segments);
        assert_eq!(ranges, vec![MatchedRange { start: 0.0, end: 12.0 }]);
    }

    #[test]
    fn segments_beyond_two_seconds_stay_separate() {
        let segments = [
            seg(0.0, 5.0, "we discuss gradient descent"),
            seg(7.1, 12.0, "gradient descent converges"),
        ];
        let ranges = match_summary_to_segments("gradient descent", &segments);
        assert_eq!(
            ranges,
            vec![
                MatchedRange { start: 0.0, end: 5.0 },
                MatchedRange {
                    start: 7.1,
                    end: 12.0
                },
            ]
        );
    }

    #[test]
    fn ranges_are_disjoint_and_ordered() {
        let segments = [
            seg(0.0, 4.0, "the lecture begins"),
            seg(4.5, 9.0, "the main theorem"),
            seg(20.0, 25.0, "the conclusion"),
        ];
        let ranges = match_summary_to_segments("the theorem and the conclusion", &segments);
        for pair in ranges.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
        for range in &ranges {
            assert!(range.start < range.end);
        }
    }

    #[test]
    fn lecture_scenario_matches_expected_ranges() {
        let segments = [
            seg(0.0, 5.0, "today we cover machine learning basics"),
            seg(5.0, 10.0, "lunch break announcement"),
            seg(10.0, 13.0, "more on learning basics today"),
        ];
        let ranges = match_summary_to_segments("machine learning basics", &segments);
        assert_eq!(
            ranges,
            vec![
                MatchedRange { start: 0.0, end: 5.0 },
                MatchedRange {
                    start: 10.0,
                    end: 13.0
                },
            ]
        );
    }

    #[test]
    fn shared_stopword_is_enough_to_match() {
        // Recall-favoring by design: any shared word triggers a match.
        let segments = [seg(0.0, 2.0, "and now the weather")];
        let ranges = match_summary_to_segments("the quarterly report", &segments);
        assert_eq!(ranges.len(), 1);
    }
}
