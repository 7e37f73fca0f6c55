//! Merges a series' data with the boundary of the series below it.

use std::cmp::Ordering;

use crate::data_types::AggregatePoint;

use super::ResolvedPoint;

/// One entry of the merged, x-sorted stacking input.
#[derive(Clone, Debug)]
pub enum AggregateItem {
    /// A data point of the series currently being laid out.
    Current(ResolvedPoint),
    /// A vertex of the lower series' already-computed display list.
    Previous(AggregatePoint),
}

impl AggregateItem {
    pub fn x(&self) -> f64 {
        match self {
            Self::Current(p) => p.x,
            Self::Previous(p) => p.x,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, Self::Current(_))
    }

    // Sort rank at equal x: Previous entries come first.
    fn origin_rank(&self) -> u8 {
        match self {
            Self::Previous(_) => 0,
            Self::Current(_) => 1,
        }
    }
}

/// Combines `current` data points and the `previous` series' display list
/// into one list sorted ascending by x.
///
/// Tie-break at equal x is explicit: Previous before Current, then insertion
/// order (the sort is stable). The path builder relies on this so an equal-x
/// lower-boundary vertex is always the left neighbor of the data point it
/// offsets.
///
/// Pure transform; a fresh list is produced every layout pass. If `current`
/// is empty the result is just `previous`, which renders the lower series
/// unaffected by an empty overlay.
pub fn merge(current: &[ResolvedPoint], previous: &[AggregatePoint]) -> Vec<AggregateItem> {
    let mut items = Vec::with_capacity(current.len() + previous.len());
    items.extend(previous.iter().cloned().map(AggregateItem::Previous));
    items.extend(current.iter().cloned().map(AggregateItem::Current));
    items.sort_by(|a, b| {
        a.x()
            .partial_cmp(&b.x())
            .unwrap_or(Ordering::Equal)
            .then(a.origin_rank().cmp(&b.origin_rank()))
    });
    items
}
