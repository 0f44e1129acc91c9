//! Recovery planning: choosing which neighbours rebuild an unhealthy pixel
//!
//! Attempts, first success wins:
//! 1. Horizontal and vertical lines, when both are complete
//! 2. Both diagonal lines, when both are complete
//! 3. Whatever the horizontal and vertical searches kept, each anchor weighted
//!    [`FALLBACK_WEIGHT`]
//!
//! The fallback weights are deliberately left un-normalised, so a fallback
//! reconstruction is a sum of anchors rather than their mean.

use crate::io::error::{RecoveryError, Result};
use crate::recovery::executor::RecoveryConfig;
use crate::recovery::health::HealthPredicate;
use crate::recovery::line::{InterpolationLine, WeightedNeighbor, build_line};
use crate::spatial::{Axis, Coordinate, IntensityView};

/// Weight given to every kept anchor of a fallback plan
pub const FALLBACK_WEIGHT: f64 = 1.0;

/// Which attempt produced a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanStrategy {
    /// Horizontal and vertical lines
    Cardinal,
    /// Main and anti diagonal lines
    Diagonal,
    /// Best-effort equal weights over the cardinal anchors
    Fallback,
}

/// Replacement recipe for one unhealthy pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoveryPlan {
    /// Pixel being recovered
    pub target: Coordinate,
    /// Attempt that produced the neighbours
    pub strategy: PlanStrategy,
    /// Two anchors per axis, first axis first
    pub neighbors: [WeightedNeighbor; 4],
}

impl RecoveryPlan {
    fn from_lines(
        target: Coordinate,
        strategy: PlanStrategy,
        a: &InterpolationLine,
        b: &InterpolationLine,
    ) -> Self {
        Self {
            target,
            strategy,
            neighbors: [a.first, a.second, b.first, b.second],
        }
    }

    fn fallback(
        target: Coordinate,
        horizontal: &InterpolationLine,
        vertical: &InterpolationLine,
    ) -> Self {
        let equalise = |neighbor: WeightedNeighbor| {
            neighbor.coords.map_or(WeightedNeighbor::ABSENT, |coords| {
                WeightedNeighbor::new(coords, FALLBACK_WEIGHT)
            })
        };

        Self {
            target,
            strategy: PlanStrategy::Fallback,
            neighbors: [
                equalise(horizontal.first),
                equalise(horizontal.second),
                equalise(vertical.first),
                equalise(vertical.second),
            ],
        }
    }

    /// Sum of all neighbour weights
    ///
    /// 1.0 for cardinal and diagonal plans, anything from 0 to 4 for fallbacks.
    pub fn total_weight(&self) -> f64 {
        self.neighbors.iter().map(|neighbor| neighbor.weight).sum()
    }

    /// Whether any neighbour carries weight
    pub fn has_contributors(&self) -> bool {
        self.neighbors
            .iter()
            .any(|neighbor| neighbor.is_present() && neighbor.weight > 0.0)
    }
}

/// Build the recovery plan for `target`
///
/// Planning only reads the image. It is deterministic and never fails for a
/// target inside the image; when no healthy pixel is reachable at all the plan
/// is a fallback with four absent neighbours.
///
/// # Errors
///
/// Returns an error if:
/// - The image has no pixels
/// - `target` lies outside the image
pub fn plan_recovery<I, P>(
    image: &I,
    predicate: &P,
    target: Coordinate,
    config: &RecoveryConfig,
) -> Result<RecoveryPlan>
where
    I: IntensityView + ?Sized,
    P: HealthPredicate + ?Sized,
{
    if image.is_empty() {
        return Err(RecoveryError::EmptyImage {
            rows: image.rows(),
            cols: image.cols(),
        });
    }
    if !image.contains(target) {
        return Err(RecoveryError::CoordinateOutOfRange {
            coords: target,
            dimensions: (image.rows(), image.cols()),
        });
    }

    let line = |axis| {
        build_line(
            image,
            predicate,
            target,
            axis,
            config.max_depth,
            config.distance_threshold,
        )
    };

    let horizontal = line(Axis::Horizontal);
    let vertical = line(Axis::Vertical);
    if horizontal.is_complete() && vertical.is_complete() {
        return Ok(RecoveryPlan::from_lines(
            target,
            PlanStrategy::Cardinal,
            &horizontal,
            &vertical,
        ));
    }

    let main_diagonal = line(Axis::MainDiagonal);
    let anti_diagonal = line(Axis::AntiDiagonal);
    if main_diagonal.is_complete() && anti_diagonal.is_complete() {
        return Ok(RecoveryPlan::from_lines(
            target,
            PlanStrategy::Diagonal,
            &main_diagonal,
            &anti_diagonal,
        ));
    }

    Ok(RecoveryPlan::fallback(target, &horizontal, &vertical))
}
