//! Constants used throughout the application

/// Number of landmarks produced per detected hand
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Landmark index of the wrist
pub const WRIST_LANDMARK: usize = 0;

/// Landmark index of the thumb tip
pub const THUMB_TIP_LANDMARK: usize = 4;

/// Landmark index of the index finger tip
pub const INDEX_TIP_LANDMARK: usize = 8;

/// Horizontal wrist displacement (normalized units) that counts as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 0.11;

/// Thumb-to-index distance (normalized units) below which the hand is pinching
pub const DEFAULT_PINCH_THRESHOLD: f64 = 0.03;

/// Minimum gap between two accepted pinches
pub const DEFAULT_PINCH_DEBOUNCE_MS: u64 = 900;

/// Radius of the sphere photo markers sit on
pub const DEFAULT_MARKER_RADIUS: f64 = 1.25;

/// Radius of the timeline ring that trails point to
pub const DEFAULT_RING_RADIUS: f64 = 1.78;

/// Number of interpolation steps along a trail
pub const DEFAULT_TRAIL_SEGMENTS: usize = 25;

/// Default moving average window for wrist smoothing
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 3;

/// Default exponential smoothing factor for wrist smoothing
pub const DEFAULT_EXPONENTIAL_ALPHA: f64 = 0.6;

/// Exponential filter bounds
pub const EXPONENTIAL_ALPHA_MIN: f64 = 0.0;
pub const EXPONENTIAL_ALPHA_MAX: f64 = 1.0;

/// Camera capture size
pub const DEFAULT_CAMERA_WIDTH: u32 = 640;
pub const DEFAULT_CAMERA_HEIGHT: u32 = 360;

/// Detector confidence defaults
pub const DEFAULT_MIN_DETECTION_CONFIDENCE: f32 = 0.75;
pub const DEFAULT_MIN_TRACKING_CONFIDENCE: f32 = 0.7;

/// Default render rate
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Marker and trail styling, active photo first
pub const ACTIVE_MARKER_SIZE: f64 = 0.05;
pub const INACTIVE_MARKER_SIZE: f64 = 0.028;
pub const ACTIVE_MARKER_COLOR: u32 = 0x00ff_7cc8;
pub const INACTIVE_MARKER_COLOR: u32 = 0x00ff_ec6a;
pub const ACTIVE_MARKER_OPACITY: f32 = 1.0;
pub const INACTIVE_MARKER_OPACITY: f32 = 0.85;
pub const ACTIVE_TRAIL_COLOR: u32 = 0x00ff_8de6;
pub const INACTIVE_TRAIL_COLOR: u32 = 0x0075_dfff;
pub const ACTIVE_TRAIL_OPACITY: f32 = 0.9;
pub const INACTIVE_TRAIL_OPACITY: f32 = 0.18;

/// Per-frame animation increments (radians)
pub const GLOBE_SPIN_PER_FRAME: f64 = 0.0009;
pub const SHELL_SPIN_PER_FRAME: f64 = -0.0004;
pub const BAND_SPIN_PER_FRAME: f64 = 0.001;
pub const STARFIELD_SPIN_PER_FRAME: f64 = 0.000_15;

/// World bobbing motion
pub const WORLD_BOB_FREQUENCY: f64 = 0.9;
pub const WORLD_BOB_AMPLITUDE: f64 = 0.03;

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
