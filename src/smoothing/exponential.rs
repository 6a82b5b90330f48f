use super::PointFilter;
use crate::{
    constants::{EXPONENTIAL_ALPHA_MAX, EXPONENTIAL_ALPHA_MIN},
    Error, Result,
};

/// Exponential smoothing filter
pub struct ExponentialFilter {
    alpha: f64,
    last: Option<(f64, f64)>,
}

impl ExponentialFilter {
    /// Create a filter with smoothing factor `alpha` in (0, 1]
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha` is outside (0, 1].
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > EXPONENTIAL_ALPHA_MIN && alpha <= EXPONENTIAL_ALPHA_MAX) {
            return Err(Error::SmoothingError(format!("Alpha must be in (0, 1], got {alpha}")));
        }
        Ok(Self { alpha, last: None })
    }
}

impl PointFilter for ExponentialFilter {
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64) {
        let filtered = match self.last {
            Some((last_x, last_y)) => (
                self.alpha * x + (1.0 - self.alpha) * last_x,
                self.alpha * y + (1.0 - self.alpha) * last_y,
            ),
            None => (x, y),
        };

        self.last = Some(filtered);
        filtered
    }

    fn reset(&mut self) {
        self.last = None;
    }

    fn name(&self) -> &str {
        "ExponentialFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_filter() {
        let mut filter = ExponentialFilter::new(0.5).unwrap();

        // First value passes through
        let (x1, y1) = filter.apply(0.2, 0.4);
        assert_eq!(x1, 0.2);
        assert_eq!(y1, 0.4);

        // Second value is smoothed
        let (x2, _) = filter.apply(0.4, 0.4);
        assert!((x2 - 0.3).abs() < 1e-12); // 0.5 * 0.4 + 0.5 * 0.2
    }

    #[test]
    fn test_alpha_bounds() {
        assert!(ExponentialFilter::new(0.0).is_err());
        assert!(ExponentialFilter::new(1.5).is_err());
        assert!(ExponentialFilter::new(f64::NAN).is_err());
        assert!(ExponentialFilter::new(1.0).is_ok());
    }
}
