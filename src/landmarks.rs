//! Hand landmark sources.
//!
//! The hand detector itself is external. A [`LandmarkSource`] delivers its
//! per-frame output: either one hand's landmarks or nothing. [`ReplaySource`]
//! plays back a recorded trace so the rest of the pipeline can run without a
//! camera.

use crate::{config::CameraConfig, gesture::GestureSample, Error, Result};
use log::{debug, info};
use nalgebra::Point2;
use serde::Deserialize;
use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;

/// One detected hand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    /// Tracked points
    pub sample: GestureSample,
    /// Detector confidence (0.0-1.0)
    pub score: f32,
}

/// Detector output for one camera frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandFrame {
    /// Capture time since the source was started
    pub timestamp: Duration,
    /// The detected hand, `None` when no hand was found
    pub hand: Option<HandLandmarks>,
}

/// Camera plus hand detector
pub trait LandmarkSource {
    /// Acquire the camera and begin detection
    ///
    /// # Errors
    ///
    /// Returns an error if the camera cannot be acquired.
    fn start(&mut self, config: &CameraConfig) -> Result<()>;

    /// Release the camera. Safe to call when not started.
    fn stop(&mut self);

    /// Next available frame at session time `now`, without blocking
    fn poll_frame(&mut self, now: Duration) -> Option<HandFrame>;

    /// Whether the source will never produce another frame
    fn is_finished(&self) -> bool {
        false
    }
}

type TracePoint = [f64; 2];

fn to_point([x, y]: TracePoint) -> Point2<f64> {
    Point2::new(x, y)
}

const fn default_score() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TraceHand {
    Named {
        wrist: TracePoint,
        thumb_tip: TracePoint,
        index_tip: TracePoint,
        #[serde(default = "default_score")]
        score: f32,
    },
    Full {
        landmarks: Vec<TracePoint>,
        #[serde(default = "default_score")]
        score: f32,
    },
}

#[derive(Debug, Deserialize)]
struct TraceFrame {
    t_ms: u64,
    #[serde(default)]
    hand: Option<TraceHand>,
}

impl TryFrom<TraceFrame> for HandFrame {
    type Error = Error;

    fn try_from(frame: TraceFrame) -> Result<Self> {
        let hand = match frame.hand {
            None => None,
            Some(TraceHand::Named {
                wrist,
                thumb_tip,
                index_tip,
                score,
            }) => Some(HandLandmarks {
                sample: GestureSample::new(to_point(wrist), to_point(thumb_tip), to_point(index_tip)),
                score,
            }),
            Some(TraceHand::Full { landmarks, score }) => {
                let points: Vec<Point2<f64>> = landmarks.into_iter().map(to_point).collect();
                Some(HandLandmarks {
                    sample: GestureSample::from_landmarks(&points)?,
                    score,
                })
            }
        };
        Ok(Self {
            timestamp: Duration::from_millis(frame.t_ms),
            hand,
        })
    }
}

/// Plays back a recorded landmark trace
#[derive(Debug, Clone)]
pub struct ReplaySource {
    frames: Vec<HandFrame>,
    pending: VecDeque<HandFrame>,
    running: bool,
}

impl ReplaySource {
    /// Create a source from frames, which must be in timestamp order
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if timestamps go backwards.
    pub fn new(frames: Vec<HandFrame>) -> Result<Self> {
        if let Some(pair) = frames.windows(2).find(|pair| pair[1].timestamp < pair[0].timestamp) {
            return Err(Error::InvalidInput(format!(
                "Trace timestamps go backwards at {}ms",
                pair[1].timestamp.as_millis()
            )));
        }
        Ok(Self {
            frames,
            pending: VecDeque::new(),
            running: false,
        })
    }

    /// Parse a YAML trace
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or a frame is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let trace: Vec<TraceFrame> = serde_yaml::from_str(yaml)?;
        let frames = trace
            .into_iter()
            .map(HandFrame::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::new(frames)
    }

    /// Load a YAML trace from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading gesture trace from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Number of frames in the trace
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the trace has no frames
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl LandmarkSource for ReplaySource {
    fn start(&mut self, config: &CameraConfig) -> Result<()> {
        if self.frames.is_empty() {
            return Err(Error::LandmarkSource("Gesture trace contains no frames".to_string()));
        }
        info!(
            "Replaying {} frames as a {}x{} camera",
            self.frames.len(),
            config.width,
            config.height
        );
        self.pending = self.frames.iter().copied().collect();
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) {
        if self.running {
            debug!("Replay stopped with {} frames pending", self.pending.len());
        }
        self.pending.clear();
        self.running = false;
    }

    fn poll_frame(&mut self, now: Duration) -> Option<HandFrame> {
        if !self.running {
            return None;
        }
        match self.pending.front() {
            Some(frame) if frame.timestamp <= now => self.pending.pop_front(),
            _ => None,
        }
    }

    fn is_finished(&self) -> bool {
        self.running && self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACE: &str = r"
- t_ms: 0
  hand:
    wrist: [0.40, 0.60]
    thumb_tip: [0.45, 0.50]
    index_tip: [0.50, 0.45]
- t_ms: 33
- t_ms: 66
  hand:
    wrist: [0.42, 0.60]
    thumb_tip: [0.47, 0.50]
    index_tip: [0.52, 0.45]
    score: 0.5
";

    #[test]
    fn test_parse_trace() {
        let source = ReplaySource::from_yaml(TRACE).unwrap();
        assert_eq!(source.len(), 3);
        assert!(source.frames[1].hand.is_none());
        let hand = source.frames[2].hand.unwrap();
        assert_eq!(hand.score, 0.5);
        assert_eq!(hand.sample.wrist, Point2::new(0.42, 0.60));
    }

    #[test]
    fn test_full_landmark_frame() {
        let points: Vec<String> = (0..21).map(|i| format!("[{}, 0.5]", f64::from(i) / 100.0)).collect();
        let yaml = format!("- t_ms: 5\n  hand:\n    landmarks: [{}]\n", points.join(", "));
        let source = ReplaySource::from_yaml(&yaml).unwrap();
        let hand = source.frames[0].hand.unwrap();
        assert_eq!(hand.sample.thumb_tip, Point2::new(0.04, 0.5));
        assert_eq!(hand.score, 1.0);

        let short = "- t_ms: 5\n  hand:\n    landmarks: [[0.1, 0.1], [0.2, 0.2]]\n";
        assert!(ReplaySource::from_yaml(short).is_err());
    }

    #[test]
    fn test_frames_released_by_time() {
        let mut source = ReplaySource::from_yaml(TRACE).unwrap();
        assert!(source.poll_frame(Duration::from_secs(1)).is_none());

        source.start(&CameraConfig::default()).unwrap();
        assert!(source.poll_frame(Duration::ZERO).is_some());
        assert!(source.poll_frame(Duration::from_millis(20)).is_none());
        assert!(source.poll_frame(Duration::from_millis(70)).is_some());
        assert!(source.poll_frame(Duration::from_millis(70)).is_some());
        assert!(source.is_finished());
    }

    #[test]
    fn test_backwards_trace_rejected() {
        let yaml = "- t_ms: 50\n- t_ms: 10\n";
        assert!(ReplaySource::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_empty_trace_fails_to_start() {
        let mut source = ReplaySource::new(Vec::new()).unwrap();
        assert!(source.start(&CameraConfig::default()).is_err());
    }
}
