//! Helper functions and utilities for tests

#![allow(dead_code)]

use nalgebra::Point2;
use particle_album::{
    config::GestureConfig,
    gesture::{GestureInterpreter, GestureSample, IntentQueue, NavigationIntent},
    photo::{Photo, PhotoTime},
};
use std::time::Duration;

/// Create `n` photos spread over the globe, in timeline order
pub fn create_test_photos(n: usize) -> Vec<Photo> {
    (0..n)
        .map(|i| Photo {
            id: format!("photo-{i}"),
            title: format!("Stop {i}"),
            lat: -60.0 + 15.0 * i as f64,
            lon: -170.0 + 40.0 * i as f64,
            time: PhotoTime::EpochMillis(1_690_000_000_000 + 86_400_000 * i as i64),
            notes: None,
            file_ref: format!("/uploads/{i}.jpg"),
        })
        .collect()
}

/// An open hand (no pinch) with the wrist at `x`
pub fn open_hand(x: f64) -> GestureSample {
    GestureSample::new(Point2::new(x, 0.6), Point2::new(x + 0.08, 0.45), Point2::new(x + 0.15, 0.35))
}

/// A pinching hand with the wrist at `x`
pub fn pinching_hand(x: f64) -> GestureSample {
    GestureSample::new(Point2::new(x, 0.6), Point2::new(x + 0.1, 0.4), Point2::new(x + 0.11, 0.4))
}

/// Interpreter with default thresholds
pub fn create_test_interpreter() -> GestureInterpreter {
    GestureInterpreter::new(&GestureConfig::default()).expect("default gesture config is valid")
}

/// Feed `(ms, sample)` frames and collect every emitted intent
pub fn run_frames(
    interpreter: &mut GestureInterpreter,
    frames: &[(u64, Option<GestureSample>)],
) -> Vec<NavigationIntent> {
    let mut queue = IntentQueue::new();
    for (ms, sample) in frames {
        interpreter.process(Duration::from_millis(*ms), sample.as_ref(), &mut queue);
    }
    queue.drain()
}
