//! Weighted round-robin configuration.

use crate::error::{AllocError, AllocResult};

/// What to do when a player's priority denominator `allocated + y` is zero.
///
/// This only arises when `y` is zero or a negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroDenominatorPolicy {
    /// Abort the run with [`AllocError::DivisionByZero`].
    #[default]
    Error,

    /// Treat the player's priority as `+inf`.
    ///
    /// Several players at `+inf` still resolve to the lowest index.
    InfinitePriority,
}

/// Configuration for the weighted round-robin allocator.
///
/// # Examples
///
/// ```
/// use u_fairdiv::wrr::{WrrConfig, ZeroDenominatorPolicy};
///
/// let config = WrrConfig::default()
///     .with_y(0.0)
///     .with_zero_denominator(ZeroDenominatorPolicy::InfinitePriority);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrrConfig {
    /// Offset added to a player's allocated count before dividing its right.
    ///
    /// Priority is `right / (allocated + y)`. `y = 1` gives the classic
    /// D'Hondt-style divisor sequence 1, 2, 3, ...; `y = 0.5` gives
    /// Sainte-Laguë-style divisors.
    pub y: f64,

    /// Behavior when `allocated + y == 0`.
    pub zero_denominator: ZeroDenominatorPolicy,
}

impl Default for WrrConfig {
    fn default() -> Self {
        Self {
            y: 1.0,
            zero_denominator: ZeroDenominatorPolicy::default(),
        }
    }
}

impl WrrConfig {
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn with_zero_denominator(mut self, policy: ZeroDenominatorPolicy) -> Self {
        self.zero_denominator = policy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AllocResult<()> {
        if !self.y.is_finite() {
            return Err(AllocError::InvalidInput(format!(
                "y must be finite, got {}",
                self.y
            )));
        }
        Ok(())
    }
}
