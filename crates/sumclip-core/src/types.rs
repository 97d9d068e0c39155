use serde::{Deserialize, Serialize};

use crate::error::{Result, SumclipError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    pub segments: Vec<Segment>,
    pub language: String,
}

/// A timestamped slice of transcript text, in seconds from video start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// A merged time interval believed to correspond to part of a summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchedRange {
    pub start: f64,
    pub end: f64,
}

/// A user-requested clip window. Must be validated before any cutting runs.
#[derive(Debug, Clone, Copy)]
pub struct ClipRequest {
    pub start: f64,
    pub end: f64,
}

impl ClipRequest {
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if start >= end {
            return Err(SumclipError::InvalidClipRange { start, end });
        }
        Ok(Self { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_request_accepts_ordered_range() {
        let req = ClipRequest::new(1.5, 10.0).unwrap();
        assert_eq!(req.start, 1.5);
        assert_eq!(req.end, 10.0);
    }

    #[test]
    fn clip_request_rejects_reversed_range() {
        assert!(matches!(
            ClipRequest::new(10.0, 5.0),
            Err(SumclipError::InvalidClipRange { .. })
        ));
    }

    #[test]
    fn clip_request_rejects_empty_range() {
        assert!(ClipRequest::new(3.0, 3.0).is_err());
    }
}
