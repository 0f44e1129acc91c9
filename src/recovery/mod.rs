/// Recovery orchestration, configuration and reporting
pub mod executor;
/// Health predicates classifying samples
pub mod health;
/// Interpolation line construction and weighting
pub mod line;
/// Per-pixel recovery planning with axis fallback
pub mod planner;
/// Weighted reconstruction of planned pixels
pub mod reconstruction;
/// Directional nearest-healthy-pixel search
pub mod search;

pub use executor::{RecoveryConfig, RecoveryContext, RecoveryReport, recover};
pub use health::{HealthPredicate, IntensityCeiling};
pub use planner::{PlanStrategy, RecoveryPlan};
