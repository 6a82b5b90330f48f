//! Gesture interpretation from hand landmark frames.
//!
//! A swipe is a horizontal wrist displacement larger than the swipe threshold
//! measured from a baseline taken when the hand was first seen (or when the
//! last swipe fired). A pinch is the thumb tip and index tip coming closer
//! than the pinch threshold, debounced so a held pinch only fires once per
//! debounce window. Both feed the same [`IntentQueue`].

use crate::{
    config::GestureConfig,
    constants::{INDEX_TIP_LANDMARK, NUM_HAND_LANDMARKS, THUMB_TIP_LANDMARK, WRIST_LANDMARK},
    smoothing::{create_filter, PointFilter},
    Error, Result,
};
use log::debug;
use nalgebra::{distance, Point2};
use std::collections::VecDeque;
use std::time::Duration;

/// One frame's worth of hand landmarks in normalized camera coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Wrist position
    pub wrist: Point2<f64>,
    /// Thumb tip position
    pub thumb_tip: Point2<f64>,
    /// Index finger tip position
    pub index_tip: Point2<f64>,
}

impl GestureSample {
    /// Create a sample from the three tracked points
    #[must_use]
    pub const fn new(wrist: Point2<f64>, thumb_tip: Point2<f64>, index_tip: Point2<f64>) -> Self {
        Self {
            wrist,
            thumb_tip,
            index_tip,
        }
    }

    /// Pick the wrist, thumb tip and index tip out of a full hand landmark set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if fewer than 21 landmarks are supplied.
    pub fn from_landmarks(landmarks: &[Point2<f64>]) -> Result<Self> {
        if landmarks.len() < NUM_HAND_LANDMARKS {
            return Err(Error::InvalidInput(format!(
                "Expected {NUM_HAND_LANDMARKS} hand landmarks, got {}",
                landmarks.len()
            )));
        }
        Ok(Self::new(
            landmarks[WRIST_LANDMARK],
            landmarks[THUMB_TIP_LANDMARK],
            landmarks[INDEX_TIP_LANDMARK],
        ))
    }

    /// Distance between thumb tip and index tip
    #[must_use]
    pub fn pinch_distance(&self) -> f64 {
        distance(&self.thumb_tip, &self.index_tip)
    }
}

/// Discrete navigation request produced by a gesture or a UI control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Move to the next photo
    Advance,
    /// Move to the previous photo
    Retreat,
}

impl NavigationIntent {
    /// Cursor delta for this intent
    #[must_use]
    pub const fn delta(self) -> isize {
        match self {
            Self::Advance => 1,
            Self::Retreat => -1,
        }
    }
}

/// FIFO of navigation intents awaiting application
#[derive(Debug, Default)]
pub struct IntentQueue {
    intents: VecDeque<NavigationIntent>,
}

impl IntentQueue {
    /// Create an empty queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an intent
    pub fn push(&mut self, intent: NavigationIntent) {
        self.intents.push_back(intent);
    }

    /// Take the oldest intent
    pub fn pop(&mut self) -> Option<NavigationIntent> {
        self.intents.pop_front()
    }

    /// Take every pending intent in arrival order
    pub fn drain(&mut self) -> Vec<NavigationIntent> {
        self.intents.drain(..).collect()
    }

    /// Pending intents
    #[must_use]
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Whether nothing is pending
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

/// Swipe tracking state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeState {
    /// No hand in view
    NoHand,
    /// Hand in view, displacement measured from `baseline` wrist x
    Tracking {
        /// Reference wrist x
        baseline: f64,
    },
}

/// Stateful filter turning landmark frames into navigation intents
pub struct GestureInterpreter {
    swipe_threshold: f64,
    pinch_threshold: f64,
    pinch_debounce: Duration,
    smoother: Box<dyn PointFilter>,
    swipe_baseline: Option<f64>,
    last_pinch: Option<Duration>,
}

impl GestureInterpreter {
    /// Create an interpreter from gesture configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured smoothing filter is invalid.
    pub fn new(config: &GestureConfig) -> Result<Self> {
        let smoother = create_filter(&config.smoothing)?;
        Ok(Self::with_filter(config, smoother))
    }

    /// Create an interpreter with an explicit wrist smoothing filter
    #[must_use]
    pub fn with_filter(config: &GestureConfig, smoother: Box<dyn PointFilter>) -> Self {
        Self {
            swipe_threshold: config.swipe_threshold,
            pinch_threshold: config.pinch_threshold,
            pinch_debounce: Duration::from_millis(config.pinch_debounce_ms),
            smoother,
            swipe_baseline: None,
            last_pinch: None,
        }
    }

    /// Interpret one frame captured at `timestamp` (monotonic, since session start).
    ///
    /// `None` means the detector saw no hand. Intents are appended to `queue`;
    /// the number appended is returned.
    pub fn process(
        &mut self,
        timestamp: Duration,
        sample: Option<&GestureSample>,
        queue: &mut IntentQueue,
    ) -> usize {
        let Some(sample) = sample else {
            if self.swipe_baseline.take().is_some() {
                debug!("Hand lost, swipe baseline cleared");
            }
            self.smoother.reset();
            return 0;
        };

        let mut emitted = 0;

        let (wrist_x, _) = self.smoother.apply(sample.wrist.x, sample.wrist.y);
        let baseline = *self.swipe_baseline.get_or_insert(wrist_x);
        let delta = wrist_x - baseline;
        if delta > self.swipe_threshold {
            debug!("Swipe right ({delta:.3}), advancing");
            queue.push(NavigationIntent::Advance);
            self.swipe_baseline = Some(wrist_x);
            emitted += 1;
        } else if delta < -self.swipe_threshold {
            debug!("Swipe left ({delta:.3}), retreating");
            queue.push(NavigationIntent::Retreat);
            self.swipe_baseline = Some(wrist_x);
            emitted += 1;
        }

        if sample.pinch_distance() < self.pinch_threshold && self.pinch_ready(timestamp) {
            debug!("Pinch at {}ms, advancing", timestamp.as_millis());
            queue.push(NavigationIntent::Advance);
            self.last_pinch = Some(timestamp);
            emitted += 1;
        }

        emitted
    }

    fn pinch_ready(&self, now: Duration) -> bool {
        match self.last_pinch {
            None => true,
            // A timestamp earlier than the last pinch never re-arms the pinch
            Some(last) => now.checked_sub(last).is_some_and(|gap| gap > self.pinch_debounce),
        }
    }

    /// Current swipe state
    #[must_use]
    pub fn swipe_state(&self) -> SwipeState {
        match self.swipe_baseline {
            Some(baseline) => SwipeState::Tracking { baseline },
            None => SwipeState::NoHand,
        }
    }

    /// Time of the last accepted pinch
    #[must_use]
    pub const fn last_pinch(&self) -> Option<Duration> {
        self.last_pinch
    }

    /// Forget all tracking state, as after a detector restart
    pub fn reset(&mut self) {
        self.swipe_baseline = None;
        self.last_pinch = None;
        self.smoother.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_hand(x: f64) -> GestureSample {
        GestureSample::new(Point2::new(x, 0.5), Point2::new(x + 0.1, 0.4), Point2::new(x + 0.2, 0.3))
    }

    #[test]
    fn test_first_hand_sets_baseline() {
        let mut interpreter = GestureInterpreter::new(&GestureConfig::default()).unwrap();
        let mut queue = IntentQueue::new();
        assert_eq!(interpreter.swipe_state(), SwipeState::NoHand);
        interpreter.process(Duration::ZERO, Some(&open_hand(0.4)), &mut queue);
        assert_eq!(interpreter.swipe_state(), SwipeState::Tracking { baseline: 0.4 });
        assert!(queue.is_empty());
    }

    #[test]
    fn test_swipe_left_rebases() {
        let mut interpreter = GestureInterpreter::new(&GestureConfig::default()).unwrap();
        let mut queue = IntentQueue::new();
        interpreter.process(Duration::ZERO, Some(&open_hand(0.6)), &mut queue);
        let emitted = interpreter.process(Duration::from_millis(33), Some(&open_hand(0.45)), &mut queue);
        assert_eq!(emitted, 1);
        assert_eq!(queue.pop(), Some(NavigationIntent::Retreat));
        assert_eq!(interpreter.swipe_state(), SwipeState::Tracking { baseline: 0.45 });
    }

    #[test]
    fn test_small_motion_keeps_baseline() {
        let mut interpreter = GestureInterpreter::new(&GestureConfig::default()).unwrap();
        let mut queue = IntentQueue::new();
        interpreter.process(Duration::ZERO, Some(&open_hand(0.5)), &mut queue);
        interpreter.process(Duration::from_millis(33), Some(&open_hand(0.58)), &mut queue);
        assert_eq!(interpreter.swipe_state(), SwipeState::Tracking { baseline: 0.5 });
        // Drift accumulates against the original baseline
        interpreter.process(Duration::from_millis(66), Some(&open_hand(0.62)), &mut queue);
        assert_eq!(queue.drain(), vec![NavigationIntent::Advance]);
    }

    #[test]
    fn test_pinch_ignores_backwards_time() {
        let mut interpreter = GestureInterpreter::new(&GestureConfig::default()).unwrap();
        let mut queue = IntentQueue::new();
        let pinch = GestureSample::new(Point2::new(0.5, 0.5), Point2::new(0.3, 0.3), Point2::new(0.31, 0.3));
        interpreter.process(Duration::from_millis(2000), Some(&pinch), &mut queue);
        interpreter.process(Duration::from_millis(100), Some(&pinch), &mut queue);
        assert_eq!(queue.len(), 1);
        assert_eq!(interpreter.last_pinch(), Some(Duration::from_millis(2000)));
    }

    #[test]
    fn test_from_landmarks() {
        let landmarks: Vec<Point2<f64>> = (0..21).map(|i| Point2::new(f64::from(i) / 21.0, 0.5)).collect();
        let sample = GestureSample::from_landmarks(&landmarks).unwrap();
        assert_eq!(sample.wrist, landmarks[0]);
        assert_eq!(sample.thumb_tip, landmarks[4]);
        assert_eq!(sample.index_tip, landmarks[8]);
        assert!(GestureSample::from_landmarks(&landmarks[..20]).is_err());
    }

    #[test]
    fn test_intent_delta() {
        assert_eq!(NavigationIntent::Advance.delta(), 1);
        assert_eq!(NavigationIntent::Retreat.delta(), -1);
    }
}
