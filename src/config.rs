//! Configuration management for the particle album application

use crate::{
    constants::{
        DEFAULT_CAMERA_HEIGHT, DEFAULT_CAMERA_WIDTH, DEFAULT_MARKER_RADIUS, DEFAULT_MIN_DETECTION_CONFIDENCE,
        DEFAULT_MIN_TRACKING_CONFIDENCE, DEFAULT_PINCH_DEBOUNCE_MS, DEFAULT_PINCH_THRESHOLD, DEFAULT_RING_RADIUS,
        DEFAULT_SWIPE_THRESHOLD, DEFAULT_TARGET_FPS, DEFAULT_TRAIL_SEGMENTS,
    },
    smoothing::create_filter,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gesture recognition configuration
    pub gesture: GestureConfig,

    /// Globe geometry configuration
    pub globe: GlobeConfig,

    /// Camera and landmark detector configuration
    pub camera: CameraConfig,

    /// Render loop configuration
    pub render: RenderConfig,
}

/// Gesture thresholds.
///
/// The defaults are empirical and meant to be tuned per camera setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Horizontal wrist displacement that triggers a swipe (normalized units)
    pub swipe_threshold: f64,

    /// Thumb-index distance below which a pinch is recognized (normalized units)
    pub pinch_threshold: f64,

    /// Minimum time between accepted pinches in milliseconds
    pub pinch_debounce_ms: u64,

    /// Wrist smoothing filter (`none`, `moving_average[:window]`, `exponential[:alpha]`)
    pub smoothing: String,
}

/// Globe geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    /// Radius photo markers are placed at
    pub marker_radius: f64,

    /// Radius of the timeline ring trails lead to
    pub ring_radius: f64,

    /// Interpolation steps per trail
    pub trail_segments: usize,
}

/// Camera capture and detector options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Capture width in pixels
    pub width: u32,

    /// Capture height in pixels
    pub height: u32,

    /// Maximum number of hands the detector reports
    pub max_hands: u32,

    /// Minimum score for a hand to count as detected (0.0-1.0)
    pub min_detection_confidence: f32,

    /// Minimum score for the detector to keep tracking a hand (0.0-1.0)
    pub min_tracking_confidence: f32,
}

/// Render loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Target framerate
    pub target_fps: u32,

    /// Stop after this many frames (runs until the gesture source ends when unset)
    pub max_frames: Option<u64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            pinch_threshold: DEFAULT_PINCH_THRESHOLD,
            pinch_debounce_ms: DEFAULT_PINCH_DEBOUNCE_MS,
            smoothing: "none".to_string(),
        }
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            marker_radius: DEFAULT_MARKER_RADIUS,
            ring_radius: DEFAULT_RING_RADIUS,
            trail_segments: DEFAULT_TRAIL_SEGMENTS,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CAMERA_WIDTH,
            height: DEFAULT_CAMERA_HEIGHT,
            max_hands: 1,
            min_detection_confidence: DEFAULT_MIN_DETECTION_CONFIDENCE,
            min_tracking_confidence: DEFAULT_MIN_TRACKING_CONFIDENCE,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            max_frames: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        // Gesture thresholds
        if !(self.gesture.swipe_threshold > 0.0 && self.gesture.swipe_threshold < 1.0) {
            return Err(Error::ConfigError(
                "Swipe threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(self.gesture.pinch_threshold > 0.0 && self.gesture.pinch_threshold < 1.0) {
            return Err(Error::ConfigError(
                "Pinch threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        create_filter(&self.gesture.smoothing)
            .map_err(|e| Error::ConfigError(format!("Invalid smoothing filter: {e}")))?;

        // Globe geometry
        if self.globe.marker_radius <= 0.0 {
            return Err(Error::ConfigError("Marker radius must be greater than 0".to_string()));
        }
        if self.globe.ring_radius <= self.globe.marker_radius {
            return Err(Error::ConfigError(
                "Ring radius must be larger than the marker radius".to_string(),
            ));
        }
        if self.globe.trail_segments == 0 {
            return Err(Error::ConfigError("Trail segments must be greater than 0".to_string()));
        }

        // Camera
        if self.camera.width == 0 || self.camera.height == 0 {
            return Err(Error::ConfigError("Camera size must be non-zero".to_string()));
        }
        if self.camera.max_hands == 0 {
            return Err(Error::ConfigError("Max hands must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.camera.min_detection_confidence) {
            return Err(Error::ConfigError(
                "Detection confidence must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.camera.min_tracking_confidence) {
            return Err(Error::ConfigError(
                "Tracking confidence must be between 0.0 and 1.0".to_string(),
            ));
        }

        if self.render.target_fps == 0 {
            return Err(Error::ConfigError("Target FPS must be greater than 0".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Particle Album Configuration

# Gesture recognition
gesture:
  swipe_threshold: 0.11
  pinch_threshold: 0.03
  pinch_debounce_ms: 900
  smoothing: "none"

# Globe geometry
globe:
  marker_radius: 1.25
  ring_radius: 1.78
  trail_segments: 25

# Camera and hand detector
camera:
  width: 640
  height: 360
  max_hands: 1
  min_detection_confidence: 0.75
  min_tracking_confidence: 0.7

# Render loop
render:
  target_fps: 60
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let parsed: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        parsed.validate().unwrap();
        let defaults = Config::default();
        assert_eq!(parsed.gesture.swipe_threshold, defaults.gesture.swipe_threshold);
        assert_eq!(parsed.gesture.pinch_debounce_ms, defaults.gesture.pinch_debounce_ms);
        assert_eq!(parsed.globe.trail_segments, defaults.globe.trail_segments);
        assert_eq!(parsed.camera.width, defaults.camera.width);
        assert_eq!(parsed.render.max_frames, None);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = serde_yaml::from_str("gesture:\n  swipe_threshold: 0.2\n").unwrap();
        assert_eq!(parsed.gesture.swipe_threshold, 0.2);
        assert_eq!(parsed.gesture.pinch_threshold, DEFAULT_PINCH_THRESHOLD);
        assert_eq!(parsed.globe.ring_radius, DEFAULT_RING_RADIUS);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.globe.ring_radius = 1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.gesture.smoothing = "median".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.render.target_fps = 0;
        assert!(config.validate().is_err());
    }
}
