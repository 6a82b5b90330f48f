//! Smoothing filters for noisy landmark positions.
//!
//! Hand detectors jitter by a few thousandths of the frame per sample. A
//! filter can be placed in front of the swipe detector to steady the wrist
//! position before displacement is measured.

/// Moving average filter for simple smoothing
pub mod moving_average;

/// Exponential filter for responsive smoothing
pub mod exponential;

use crate::{
    constants::{DEFAULT_EXPONENTIAL_ALPHA, DEFAULT_MOVING_AVERAGE_WINDOW},
    Error, Result,
};

/// Trait for all 2D point filters
pub trait PointFilter: Send + Sync {
    /// Apply filter to a normalized point
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64);

    /// Reset filter state
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;
}

/// No-op filter that passes through values unchanged
pub struct NoFilter;

impl PointFilter for NoFilter {
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "NoFilter"
    }
}

/// Create a point filter from a spec such as `none`, `moving_average:5` or
/// `exponential:0.4`.
///
/// # Errors
///
/// Returns an error for unknown filter names or unusable parameters.
pub fn create_filter(spec: &str) -> Result<Box<dyn PointFilter>> {
    let spec = spec.trim().to_lowercase();
    let (name, param) = match spec.split_once(':') {
        Some((name, param)) => (name, Some(param)),
        None => (spec.as_str(), None),
    };

    match name {
        "none" | "nofilter" => Ok(Box::new(NoFilter)),
        "moving_average" | "movingaverage" => {
            let window = match param {
                Some(p) => p
                    .parse::<usize>()
                    .map_err(|e| Error::SmoothingError(format!("Invalid window '{p}': {e}")))?,
                None => DEFAULT_MOVING_AVERAGE_WINDOW,
            };
            Ok(Box::new(moving_average::MovingAverageFilter::new(window)?))
        }
        "exponential" => {
            let alpha = match param {
                Some(p) => p
                    .parse::<f64>()
                    .map_err(|e| Error::SmoothingError(format!("Invalid alpha '{p}': {e}")))?,
                None => DEFAULT_EXPONENTIAL_ALPHA,
            };
            Ok(Box::new(exponential::ExponentialFilter::new(alpha)?))
        }
        _ => Err(Error::SmoothingError(format!("Unknown filter type: {spec}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter() {
        let mut filter = NoFilter;
        let (x, y) = filter.apply(0.4, 0.6);
        assert_eq!(x, 0.4);
        assert_eq!(y, 0.6);
    }

    #[test]
    fn test_create_filter() {
        assert!(create_filter("none").is_ok());
        assert!(create_filter("moving_average").is_ok());
        assert!(create_filter("moving_average:5").is_ok());
        assert!(create_filter("Exponential:0.3").is_ok());
        assert!(create_filter("moving_average:0").is_err());
        assert!(create_filter("exponential:abc").is_err());
        assert!(create_filter("kalman").is_err());
    }
}
