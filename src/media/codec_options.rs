use crate::{Result, SteganoError};

/// Default epsilon margin between the two coefficients of a carrier block
pub const DEFAULT_EPSILON: f64 = 20.0;

/// Options for the DCT coefficient codec.
///
/// Unveiling only works with the same options that were used for hiding.
#[derive(Debug, Clone, PartialEq)]
pub struct DctCodecOptions {
    /// Minimum gap between the magnitudes of the two coefficients that carry one bit.
    /// Bigger values survive rounding better but change the image more visibly.
    pub epsilon: f64,
}

impl Default for DctCodecOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl DctCodecOptions {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(SteganoError::InvalidEpsilon(self.epsilon));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_zero_and_positive_epsilon() {
        assert!(DctCodecOptions::default().validate().is_ok());
        assert!(DctCodecOptions::default().with_epsilon(0.0).validate().is_ok());
    }

    #[test]
    fn should_reject_invalid_epsilon() {
        for epsilon in [-1.0, f64::NAN, f64::INFINITY] {
            match DctCodecOptions::default().with_epsilon(epsilon).validate() {
                Err(SteganoError::InvalidEpsilon(_)) => (),
                other => panic!("epsilon {epsilon} was not rejected: {other:?}"),
            }
        }
    }
}
