//! Camera session lifecycle.
//!
//! The camera is only acquired on an explicit start request. A failed start
//! releases whatever was acquired, clears gesture state and leaves the
//! session in a failed-but-retryable state.

use crate::{
    config::CameraConfig,
    gesture::{GestureInterpreter, GestureSample},
    landmarks::{HandFrame, LandmarkSource},
    Error, Result,
};
use log::{debug, info, warn};
use std::time::Duration;

/// Camera session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraState {
    /// Not started, or stopped by the user
    Idle,
    /// Delivering frames
    Running,
    /// Startup failed; `start` may be retried
    Failed(String),
}

/// Owns the landmark source and gates detections by confidence
pub struct CameraSession {
    source: Box<dyn LandmarkSource>,
    config: CameraConfig,
    state: CameraState,
    tracking: bool,
}

impl CameraSession {
    /// Wrap a landmark source
    #[must_use]
    pub fn new(source: Box<dyn LandmarkSource>, config: CameraConfig) -> Self {
        Self {
            source,
            config,
            state: CameraState::Idle,
            tracking: false,
        }
    }

    /// Acquire the camera and start detection.
    ///
    /// Gesture state is reset either way, since the detector restarts.
    ///
    /// # Errors
    ///
    /// Returns `Camera` if the source could not be started; the session is
    /// then in [`CameraState::Failed`] and can be retried.
    pub fn start(&mut self, interpreter: &mut GestureInterpreter) -> Result<()> {
        if self.state == CameraState::Running {
            debug!("Camera already running");
            return Ok(());
        }

        interpreter.reset();
        self.tracking = false;
        info!(
            "Starting camera {}x{} (max hands {}, detection {:.2}, tracking {:.2})",
            self.config.width,
            self.config.height,
            self.config.max_hands,
            self.config.min_detection_confidence,
            self.config.min_tracking_confidence
        );

        match self.source.start(&self.config) {
            Ok(()) => {
                self.state = CameraState::Running;
                info!("Gesture recognition running");
                Ok(())
            }
            Err(e) => {
                self.source.stop();
                let reason = e.to_string();
                warn!("Unable to start camera: {reason}");
                self.state = CameraState::Failed(reason.clone());
                Err(Error::Camera(reason))
            }
        }
    }

    /// Release the camera and clear gesture state
    pub fn stop(&mut self, interpreter: &mut GestureInterpreter) {
        self.source.stop();
        interpreter.reset();
        self.tracking = false;
        if self.state == CameraState::Running {
            info!("Camera stopped");
        }
        self.state = CameraState::Idle;
    }

    /// Next frame available at session time `now`, with low-confidence hands
    /// reported as absent. Never blocks.
    pub fn poll(&mut self, now: Duration) -> Option<(Duration, Option<GestureSample>)> {
        if self.state != CameraState::Running {
            return None;
        }
        let frame = self.source.poll_frame(now)?;
        Some((frame.timestamp, self.gate(&frame)))
    }

    fn gate(&mut self, frame: &HandFrame) -> Option<GestureSample> {
        let threshold = if self.tracking {
            self.config.min_tracking_confidence
        } else {
            self.config.min_detection_confidence
        };
        let accepted = frame.hand.filter(|hand| hand.score >= threshold);
        self.tracking = accepted.is_some();
        accepted.map(|hand| hand.sample)
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &CameraState {
        &self.state
    }

    /// Whether the source has run out of frames
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == CameraState::Running && self.source.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GestureConfig;
    use crate::landmarks::{HandLandmarks, ReplaySource};
    use nalgebra::Point2;

    fn frame(ms: u64, score: f32) -> HandFrame {
        HandFrame {
            timestamp: Duration::from_millis(ms),
            hand: Some(HandLandmarks {
                sample: GestureSample::new(Point2::new(0.5, 0.5), Point2::new(0.6, 0.4), Point2::new(0.7, 0.3)),
                score,
            }),
        }
    }

    #[test]
    fn test_confidence_gating() {
        let frames = vec![frame(0, 0.7), frame(10, 0.8), frame(20, 0.72), frame(30, 0.6)];
        let source = ReplaySource::new(frames).unwrap();
        let mut session = CameraSession::new(Box::new(source), CameraConfig::default());
        let mut interpreter = GestureInterpreter::new(&GestureConfig::default()).unwrap();
        session.start(&mut interpreter).unwrap();

        let now = Duration::from_secs(1);
        // Below detection confidence
        assert!(session.poll(now).unwrap().1.is_none());
        // Detected
        assert!(session.poll(now).unwrap().1.is_some());
        // Tracking threshold is lower than detection
        assert!(session.poll(now).unwrap().1.is_some());
        // Below tracking confidence
        assert!(session.poll(now).unwrap().1.is_none());
        assert!(session.is_finished());
    }

    #[test]
    fn test_failed_start_is_retryable() {
        let source = ReplaySource::new(Vec::new()).unwrap();
        let mut session = CameraSession::new(Box::new(source), CameraConfig::default());
        let mut interpreter = GestureInterpreter::new(&GestureConfig::default()).unwrap();

        assert!(session.start(&mut interpreter).is_err());
        assert!(matches!(session.state(), CameraState::Failed(_)));
        assert!(session.poll(Duration::from_secs(1)).is_none());

        session.stop(&mut interpreter);
        assert_eq!(session.state(), &CameraState::Idle);
    }
}
