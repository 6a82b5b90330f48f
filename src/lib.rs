//! Particle album library: geotagged photos on a 3D globe, navigated by hand
//! gestures.
//!
//! The library covers the logic between a hand landmark detector and a
//! rendering engine:
//! - mapping latitude/longitude to points on the globe
//! - a timeline cursor over the photo collection, wrapping in both directions
//! - a gesture interpreter that turns landmark frames into discrete
//!   `Advance`/`Retreat` intents (wrist swipes and debounced pinches)
//! - rebuilding markers and trails whenever the cursor moves
//!
//! The detector and the renderer are reached through the
//! [`landmarks::LandmarkSource`] and [`scene::SceneGraph`] traits.
//!
//! # Examples
//!
//! ## Interpreting gestures
//!
//! ```
//! use particle_album::{
//!     config::GestureConfig,
//!     gesture::{GestureInterpreter, GestureSample, IntentQueue, NavigationIntent},
//! };
//! use nalgebra::Point2;
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut interpreter = GestureInterpreter::new(&GestureConfig::default())?;
//! let mut queue = IntentQueue::new();
//!
//! let hand = |x: f64| GestureSample::new(Point2::new(x, 0.5), Point2::new(x, 0.3), Point2::new(x + 0.1, 0.2));
//! interpreter.process(Duration::from_millis(0), Some(&hand(0.40)), &mut queue);
//! interpreter.process(Duration::from_millis(33), Some(&hand(0.53)), &mut queue);
//!
//! assert_eq!(queue.pop(), Some(NavigationIntent::Advance));
//! # Ok(())
//! # }
//! ```
//!
//! ## Navigating a collection
//!
//! ```no_run
//! use particle_album::{
//!     config::GlobeConfig, navigation::NavigationController, photo::load_photo_list,
//!     scene::HeadlessScene,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut scene = HeadlessScene::new();
//! let mut controller = NavigationController::new(&GlobeConfig::default());
//!
//! controller.on_collection_changed(load_photo_list("data/photos.json")?, &mut scene);
//! controller.step_photo(-1, &mut scene);
//!
//! println!("{}", controller.info_panel().status);
//! # Ok(())
//! # }
//! ```

/// Latitude/longitude to globe coordinates
pub mod geo;

/// Photo records from the album backend
pub mod photo;

/// Ordered photo collection with a timeline cursor
pub mod collection;

/// Marker and trail construction for the scene
pub mod scene;

/// Smoothing filters for landmark positions
pub mod smoothing;

/// Swipe and pinch recognition
pub mod gesture;

/// Cursor updates driven by intents and UI controls
pub mod navigation;

/// Status line and photo card
pub mod info_panel;

/// Hand landmark sources
pub mod landmarks;

/// Camera session lifecycle
pub mod camera;

/// Backdrop animation and frame pacing
pub mod render_loop;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
