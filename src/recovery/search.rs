//! Nearest healthy pixel search along a single direction

use crate::recovery::health::HealthPredicate;
use crate::spatial::{Coordinate, Direction, IntensityView};

/// Walk from `start` along `direction` looking for a healthy pixel
///
/// Takes at most `max_depth` steps. Each step that lands inside the grid reads
/// the sample there and returns the coordinate as soon as `predicate` accepts
/// it. The start pixel itself is never inspected.
///
/// Returns `None` when a step leaves the grid (the walk does not continue past
/// an edge) or when `max_depth` steps pass without a healthy pixel.
pub fn find_nearest_healthy<I, P>(
    image: &I,
    predicate: &P,
    start: Coordinate,
    direction: Direction,
    max_depth: usize,
) -> Option<Coordinate>
where
    I: IntensityView + ?Sized,
    P: HealthPredicate + ?Sized,
{
    let mut current = start;
    for _ in 0..max_depth {
        current = current.step(direction);
        let intensity = image.intensity_at(current)?;
        if predicate.is_healthy(intensity) {
            return Some(current);
        }
    }
    None
}
