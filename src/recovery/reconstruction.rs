//! Reconstruction: turning plans into replacement samples
//!
//! Values for a whole pass are computed against one image state and only then
//! written back, so no plan in a pass observes another plan's result.

use crate::recovery::planner::RecoveryPlan;
use crate::spatial::{Coordinate, IntensityView, IntensityViewMut};

/// A computed replacement sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconstruction {
    /// Pixel to overwrite
    pub target: Coordinate,
    /// New sample value
    pub value: u8,
}

/// Result of reconstructing every plan of one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassOutcome {
    /// Replacement values, in plan order
    pub reconstructions: Vec<Reconstruction>,
    /// Targets whose plan had no weighted neighbour; left untouched
    pub unrecovered: Vec<Coordinate>,
}

/// Weighted sum of a plan's neighbours, rounded and clamped to `0..=255`
///
/// Returns `None` when no neighbour carries weight, meaning the pixel cannot
/// be recovered and should keep its current value.
pub fn reconstruct_value<I>(plan: &RecoveryPlan, image: &I) -> Option<u8>
where
    I: IntensityView + ?Sized,
{
    if !plan.has_contributors() {
        return None;
    }

    let value: f64 = plan
        .neighbors
        .iter()
        .filter(|neighbor| neighbor.weight > 0.0)
        .filter_map(|neighbor| {
            let intensity = image.intensity_at(neighbor.coords?)?;
            Some(neighbor.weight * f64::from(intensity))
        })
        .sum();

    num_traits::cast(value.round().clamp(0.0, f64::from(u8::MAX)))
}

/// Compute replacement values for every plan against the current image
pub fn reconstruct<I>(plans: &[RecoveryPlan], image: &I) -> PassOutcome
where
    I: IntensityView + ?Sized,
{
    let mut outcome = PassOutcome::default();
    for plan in plans {
        match reconstruct_value(plan, image) {
            Some(value) => outcome.reconstructions.push(Reconstruction {
                target: plan.target,
                value,
            }),
            None => outcome.unrecovered.push(plan.target),
        }
    }
    outcome
}

/// Write replacement values into the image
///
/// Returns how many samples actually changed.
pub fn apply<I>(reconstructions: &[Reconstruction], image: &mut I) -> usize
where
    I: IntensityViewMut + ?Sized,
{
    let mut changed = 0;
    for reconstruction in reconstructions {
        let previous = image.set_intensity_at(reconstruction.target, reconstruction.value);
        if previous.is_some_and(|old| old != reconstruction.value) {
            changed += 1;
        }
    }
    changed
}
