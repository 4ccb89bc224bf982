use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, LogNormal as LogNormalDistribution};

/// Log-normal distribution of starting glucose, parameterised by the mean
/// and standard deviation of the underlying normal distribution.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LogNormal {
    pub mu: f64,
    pub sigma: f64,
}

impl LogNormal {
    /// Fails when `sigma` is not a positive finite number or `mu` is not finite.
    pub fn distribution(&self) -> Result<LogNormalDistribution, String> {
        LogNormalDistribution::new(self.mu, self.sigma)
            .map_err(|e| format!("Invalid log-normal parameters mu={}, sigma={}: {}", self.mu, self.sigma, e))
    }

    /// Probability density at `x`. Zero outside the support (`x <= 0`) and
    /// for parameters rejected by [`LogNormal::distribution`].
    pub fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.distribution().map(|distribution| distribution.pdf(x)).unwrap_or(0.0)
    }
}
