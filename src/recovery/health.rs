//! Health predicates deciding which pixels need recovery

use crate::io::configuration::DEFAULT_HEALTH_LIMIT;

/// Decides whether a sample is trustworthy
///
/// Implementations must be pure: recovery calls the predicate many times per
/// pixel and relies on identical answers for identical samples.
pub trait HealthPredicate {
    /// Whether `intensity` is a healthy sample
    fn is_healthy(&self, intensity: u8) -> bool;
}

impl<F> HealthPredicate for F
where
    F: Fn(u8) -> bool,
{
    fn is_healthy(&self, intensity: u8) -> bool {
        self(intensity)
    }
}

/// Treats every sample strictly below `limit` as healthy
///
/// Saturated or stuck-high sensor pixels sit at the top of the range, so
/// anything at or above the limit is considered broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityCeiling {
    /// Smallest unhealthy intensity
    pub limit: u8,
}

impl IntensityCeiling {
    /// Create a predicate with the given limit
    pub const fn new(limit: u8) -> Self {
        Self { limit }
    }
}

impl Default for IntensityCeiling {
    fn default() -> Self {
        Self::new(DEFAULT_HEALTH_LIMIT)
    }
}

impl HealthPredicate for IntensityCeiling {
    fn is_healthy(&self, intensity: u8) -> bool {
        intensity < self.limit
    }
}
