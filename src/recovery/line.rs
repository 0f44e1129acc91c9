//! Interpolation lines: pairs of healthy anchors on opposite sides of a pixel
//!
//! A line walks both directions of an [`Axis`] from the target pixel and turns
//! the two search results into inverse-distance weights. The weights of one
//! line add up to at most [`AXIS_CONTRIBUTION`], so two lines together account
//! for the whole replacement value.

use crate::recovery::health::HealthPredicate;
use crate::recovery::search::find_nearest_healthy;
use crate::spatial::{Axis, Coordinate, IntensityView};

/// Share of the replacement value carried by one axis
pub const AXIS_CONTRIBUTION: f64 = 0.5;

/// A neighbour taking part in a reconstruction, with its weight
///
/// The weight is zero exactly when no neighbour was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedNeighbor {
    /// Location of the healthy neighbour, `None` when absent
    pub coords: Option<Coordinate>,
    /// Contribution of the neighbour's intensity
    pub weight: f64,
}

impl WeightedNeighbor {
    /// A missing neighbour contributing nothing
    pub const ABSENT: Self = Self {
        coords: None,
        weight: 0.0,
    };

    /// A found neighbour with the given weight
    pub const fn new(coords: Coordinate, weight: f64) -> Self {
        Self {
            coords: Some(coords),
            weight,
        }
    }

    /// Whether a neighbour was found
    pub const fn is_present(&self) -> bool {
        self.coords.is_some()
    }
}

/// How many anchors of a line survived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineShape {
    /// Both anchors found at comparable distances, both weighted
    Balanced,
    /// Both anchors found but too far apart in distance; only the nearer one is kept
    Asymmetric,
    /// Only one direction found a healthy pixel
    OneSided,
    /// Neither direction found a healthy pixel
    Empty,
}

/// Two weighted anchors on opposite sides of a target pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationLine {
    /// Axis the line was walked along
    pub axis: Axis,
    /// Anchor in the first direction of the axis
    pub first: WeightedNeighbor,
    /// Anchor in the second direction of the axis
    pub second: WeightedNeighbor,
    /// Which anchors were found and kept
    pub shape: LineShape,
}

impl InterpolationLine {
    /// Whether healthy pixels were found on both sides of the target
    ///
    /// An asymmetric line counts as complete: it is bracketed by healthy
    /// pixels even though only the nearer one carries weight.
    pub const fn is_complete(&self) -> bool {
        matches!(self.shape, LineShape::Balanced | LineShape::Asymmetric)
    }

    /// Sum of both anchor weights
    pub fn weight_sum(&self) -> f64 {
        self.first.weight + self.second.weight
    }

    /// Both anchors, first direction first
    pub const fn neighbors(&self) -> [WeightedNeighbor; 2] {
        [self.first, self.second]
    }
}

/// Search both directions of `axis` from `target` and weigh what was found
pub fn build_line<I, P>(
    image: &I,
    predicate: &P,
    target: Coordinate,
    axis: Axis,
    max_depth: usize,
    distance_threshold: f64,
) -> InterpolationLine
where
    I: IntensityView + ?Sized,
    P: HealthPredicate + ?Sized,
{
    let (first_direction, second_direction) = axis.directions();
    let first = find_nearest_healthy(image, predicate, target, first_direction, max_depth);
    let second = find_nearest_healthy(image, predicate, target, second_direction, max_depth);
    weigh_anchors(axis, target, first, second, distance_threshold)
}

/// Turn two search results into an interpolation line
///
/// When both anchors exist and their distances to `target` differ by more than
/// `distance_threshold`, the farther one is dropped. Kept anchors share
/// [`AXIS_CONTRIBUTION`] in inverse proportion to their distance; a lone anchor
/// takes all of it.
pub fn weigh_anchors(
    axis: Axis,
    target: Coordinate,
    first: Option<Coordinate>,
    second: Option<Coordinate>,
    distance_threshold: f64,
) -> InterpolationLine {
    let (first, second, shape) = match (first, second) {
        (Some(a), Some(b)) => {
            let d_a = a.distance(target);
            let d_b = b.distance(target);
            if (d_a - d_b).abs() > distance_threshold {
                if d_a < d_b {
                    let near = WeightedNeighbor::new(a, AXIS_CONTRIBUTION);
                    (near, WeightedNeighbor::ABSENT, LineShape::Asymmetric)
                } else {
                    let near = WeightedNeighbor::new(b, AXIS_CONTRIBUTION);
                    (WeightedNeighbor::ABSENT, near, LineShape::Asymmetric)
                }
            } else {
                // Closer anchor gets the larger share
                let total = d_a + d_b;
                (
                    WeightedNeighbor::new(a, AXIS_CONTRIBUTION * d_b / total),
                    WeightedNeighbor::new(b, AXIS_CONTRIBUTION * d_a / total),
                    LineShape::Balanced,
                )
            }
        }
        (Some(a), None) => (
            WeightedNeighbor::new(a, AXIS_CONTRIBUTION),
            WeightedNeighbor::ABSENT,
            LineShape::OneSided,
        ),
        (None, Some(b)) => (
            WeightedNeighbor::ABSENT,
            WeightedNeighbor::new(b, AXIS_CONTRIBUTION),
            LineShape::OneSided,
        ),
        (None, None) => (
            WeightedNeighbor::ABSENT,
            WeightedNeighbor::ABSENT,
            LineShape::Empty,
        ),
    };

    InterpolationLine {
        axis,
        first,
        second,
        shape,
    }
}
