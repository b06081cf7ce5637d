use thiserror::Error;

/// Configuration for the interval Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
    residual_tol: f64,
}

/// Errors that can occur when validating an interval Newton config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(200, 1e-6, 1e-9).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// - `max_iters` bounds the number of passes over the working set.
    /// - `tolerance` is the enclosure width at which a part counts as
    ///   isolated.
    /// - `residual_tol` decides when `f'` at a midpoint is treated as zero
    ///   while `f''` vanishes too, which switches that part from a Newton
    ///   step to isolating a candidate multiple root.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive, or if
    /// `residual_tol` is negative or non-finite.
    pub fn new(max_iters: usize, tolerance: f64, residual_tol: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters,
            tolerance,
            residual_tol,
        })
    }

    /// Creates a config with the given tolerance and default remaining settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn with_tolerance(tolerance: f64) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Self::new(defaults.max_iters, tolerance, defaults.residual_tol)
    }

    /// Returns the maximum number of passes.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the isolation width.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the tolerance under which `f'` at a midpoint counts as zero.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}
