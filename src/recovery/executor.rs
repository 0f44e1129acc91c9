use crate::io::configuration::{DEFAULT_DISTANCE_THRESHOLD, DEFAULT_MAX_DEPTH, MAX_SEARCH_DEPTH};
use crate::io::error::{RecoveryError, Result, invalid_parameter};
use crate::recovery::health::HealthPredicate;
use crate::recovery::planner::{PlanStrategy, RecoveryPlan, plan_recovery};
use crate::recovery::reconstruction::{PassOutcome, apply, reconstruct};
use crate::spatial::{Coordinate, IntensityView, IntensityViewMut, PixelMask};

/// Tunable parameters of a recovery run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecoveryConfig {
    /// Maximum number of steps per directional search
    pub max_depth: usize,
    /// Largest tolerated distance difference between the anchors of a line
    pub distance_threshold: f64,
    /// Whether to re-plan pixels still unhealthy after the first pass
    pub second_pass: bool,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            second_pass: true,
        }
    }
}

impl RecoveryConfig {
    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `max_depth` is zero or above [`MAX_SEARCH_DEPTH`]
    /// - `distance_threshold` is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(invalid_parameter(
                "max_depth",
                &self.max_depth,
                &"a search must take at least one step",
            ));
        }
        if self.max_depth > MAX_SEARCH_DEPTH {
            return Err(invalid_parameter(
                "max_depth",
                &self.max_depth,
                &format!("must not exceed {MAX_SEARCH_DEPTH}"),
            ));
        }
        if !self.distance_threshold.is_finite() || self.distance_threshold < 0.0 {
            return Err(invalid_parameter(
                "distance_threshold",
                &self.distance_threshold,
                &"must be a finite, non-negative distance",
            ));
        }
        Ok(())
    }
}

/// Everything one recovery pass reads: image, predicate and configuration
///
/// The context only borrows the image immutably. Each planning call returns
/// its plans by value, and writing results back happens outside the context
/// once the pass is complete.
pub struct RecoveryContext<'a, I: ?Sized, P: ?Sized> {
    image: &'a I,
    predicate: &'a P,
    config: &'a RecoveryConfig,
}

impl<'a, I, P> RecoveryContext<'a, I, P>
where
    I: IntensityView + ?Sized,
    P: HealthPredicate + ?Sized,
{
    /// Create a context for a non-empty image and a valid configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the image has no pixels
    pub fn new(image: &'a I, predicate: &'a P, config: &'a RecoveryConfig) -> Result<Self> {
        config.validate()?;
        if image.is_empty() {
            return Err(RecoveryError::EmptyImage {
                rows: image.rows(),
                cols: image.cols(),
            });
        }
        Ok(Self {
            image,
            predicate,
            config,
        })
    }

    /// Whether the pixel at `coords` fails the health predicate
    ///
    /// Coordinates outside the image are never unhealthy.
    pub fn is_unhealthy(&self, coords: Coordinate) -> bool {
        self.image
            .intensity_at(coords)
            .is_some_and(|intensity| !self.predicate.is_healthy(intensity))
    }

    /// Plan the recovery of a single pixel
    ///
    /// # Errors
    ///
    /// Returns an error if `target` lies outside the image
    pub fn plan(&self, target: Coordinate) -> Result<RecoveryPlan> {
        plan_recovery(self.image, self.predicate, target, self.config)
    }

    /// Scan the whole image and plan every unhealthy pixel, row-major
    ///
    /// # Errors
    ///
    /// Returns an error if the image is too large for signed coordinates
    pub fn plan_unhealthy(&self) -> Result<Vec<RecoveryPlan>> {
        let mut plans = Vec::new();
        for row in 0..self.image.rows() {
            for col in 0..self.image.cols() {
                let target = Coordinate::from_indices(row, col).ok_or_else(|| {
                    invalid_parameter(
                        "dimensions",
                        &format!("{row}x{col}"),
                        &"exceeds the i32 coordinate range",
                    )
                })?;
                if self.is_unhealthy(target) {
                    plans.push(self.plan(target)?);
                }
            }
        }
        Ok(plans)
    }

    /// Plan only those of `targets` that are currently unhealthy
    ///
    /// # Errors
    ///
    /// Returns an error if a target lies outside the image
    pub fn plan_targets(
        &self,
        targets: impl IntoIterator<Item = Coordinate>,
    ) -> Result<Vec<RecoveryPlan>> {
        let mut plans = Vec::new();
        for target in targets {
            if !self.image.contains(target) {
                return Err(RecoveryError::CoordinateOutOfRange {
                    coords: target,
                    dimensions: (self.image.rows(), self.image.cols()),
                });
            }
            if self.is_unhealthy(target) {
                plans.push(self.plan(target)?);
            }
        }
        Ok(plans)
    }

    /// Compute replacement values for `plans` against the context's image
    pub fn reconstruct(&self, plans: &[RecoveryPlan]) -> PassOutcome {
        reconstruct(plans, self.image)
    }
}

/// Summary of a recovery run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryReport {
    /// Pixels inspected by the first-pass scan
    pub scanned: usize,
    /// Pixels failing the health predicate before recovery
    pub unhealthy: usize,
    /// First-pass plans built from horizontal and vertical lines
    pub cardinal_plans: usize,
    /// First-pass plans built from diagonal lines
    pub diagonal_plans: usize,
    /// First-pass plans using the equal-weight fallback
    pub fallback_plans: usize,
    /// Pixels still unhealthy after the first pass and planned again
    pub second_pass_replans: usize,
    /// Pixels whose final sample differs from the original
    pub changed: usize,
    /// Pixels that received a replacement value
    pub recovered: PixelMask,
    /// Unhealthy pixels that never received a replacement value
    pub unrecovered: PixelMask,
}

impl RecoveryReport {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            scanned: rows * cols,
            unhealthy: 0,
            cardinal_plans: 0,
            diagonal_plans: 0,
            fallback_plans: 0,
            second_pass_replans: 0,
            changed: 0,
            recovered: PixelMask::new(rows, cols),
            unrecovered: PixelMask::new(rows, cols),
        }
    }

    fn tally_strategies(&mut self, plans: &[RecoveryPlan]) {
        for plan in plans {
            match plan.strategy {
                PlanStrategy::Cardinal => self.cardinal_plans += 1,
                PlanStrategy::Diagonal => self.diagonal_plans += 1,
                PlanStrategy::Fallback => self.fallback_plans += 1,
            }
        }
    }

    fn record_pass(&mut self, outcome: &PassOutcome) {
        for reconstruction in &outcome.reconstructions {
            self.recovered.insert(reconstruction.target);
        }
    }
}

/// Recover every unhealthy pixel of `image` in place
///
/// Runs the first pass against the untouched image and writes its results back
/// only after every value of the pass is computed. With
/// [`RecoveryConfig::second_pass`] enabled, pixels of the first pass that are
/// still unhealthy are then planned again against the repaired image and
/// reconstructed the same way.
///
/// Pixels for which no healthy neighbour is reachable keep their value and are
/// reported in [`RecoveryReport::unrecovered`].
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The image has no pixels
pub fn recover<I, P>(
    image: &mut I,
    predicate: &P,
    config: &RecoveryConfig,
) -> Result<RecoveryReport>
where
    I: IntensityViewMut + ?Sized,
    P: HealthPredicate + ?Sized,
{
    let mut report = RecoveryReport::new(image.rows(), image.cols());

    let (first_plans, first_outcome) = {
        let context = RecoveryContext::new(&*image, predicate, config)?;
        let plans = context.plan_unhealthy()?;
        let outcome = context.reconstruct(&plans);
        (plans, outcome)
    };

    let originals: Vec<(Coordinate, u8)> = first_plans
        .iter()
        .filter_map(|plan| Some((plan.target, image.intensity_at(plan.target)?)))
        .collect();

    report.unhealthy = first_plans.len();
    report.tally_strategies(&first_plans);
    report.record_pass(&first_outcome);
    apply(&first_outcome.reconstructions, image);

    tracing::debug!(
        unhealthy = report.unhealthy,
        cardinal = report.cardinal_plans,
        diagonal = report.diagonal_plans,
        fallback = report.fallback_plans,
        unrecovered = first_outcome.unrecovered.len(),
        "First recovery pass complete"
    );

    if config.second_pass && !first_plans.is_empty() {
        let second_outcome = {
            let context = RecoveryContext::new(&*image, predicate, config)?;
            let plans = context.plan_targets(first_plans.iter().map(|plan| plan.target))?;
            report.second_pass_replans = plans.len();
            context.reconstruct(&plans)
        };
        report.record_pass(&second_outcome);
        apply(&second_outcome.reconstructions, image);

        tracing::debug!(
            replanned = report.second_pass_replans,
            recovered = second_outcome.reconstructions.len(),
            "Second recovery pass complete"
        );
    }

    for &(target, original) in &originals {
        if !report.recovered.contains(target) {
            report.unrecovered.insert(target);
        }
        if image.intensity_at(target).is_some_and(|value| value != original) {
            report.changed += 1;
        }
    }

    if !report.unrecovered.is_empty() {
        tracing::warn!(
            unrecovered = report.unrecovered.count(),
            "Some pixels have no healthy neighbour within the search depth"
        );
    }

    Ok(report)
}
