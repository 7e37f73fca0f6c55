//! Data structures for the layout engine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::animation::AnimatedValue;

/// Opaque handle tying a data point to the symbol node its renderer created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolHandle(pub u64);

/// One (x, y) observation inside a series.
///
/// `current_x` / `current_y` are the animated display values; they trail the
/// target `x` / `y` while an add/update transition is in flight and are the
/// values the layout actually plots.
#[derive(Clone, Debug)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub current_x: AnimatedValue,
    pub current_y: AnimatedValue,
    pub symbol: Option<SymbolHandle>,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            current_x: AnimatedValue::new(x),
            current_y: AnimatedValue::new(y),
            symbol: None,
        }
    }

    /// New point entering with an animated rise from the zero line.
    pub fn entering(x: f64, y: f64) -> Self {
        let mut point = Self::new(x, y);
        point.current_y = AnimatedValue::new(0.0);
        point.current_y.set_target(y);
        point
    }
}

/// Identifier for an in-flight removal animation, handed to the owner so the
/// matching timeline can be stopped if the removal is interrupted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RemovalId(pub u64);

/// Membership state of a series entry.
///
/// `Leaving` entries were removed by the user but are still fading out; they
/// keep contributing to layout until the owner reports the timeline finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryState {
    Active,
    Leaving(RemovalId),
}

#[derive(Clone, Debug)]
pub struct SeriesEntry {
    pub point: DataPoint,
    pub state: EntryState,
}

/// A named, ordered collection of data points rendered as one trend.
#[derive(Clone, Debug)]
pub struct Series {
    pub id: String,
    pub name: String,
    pub(crate) entries: Vec<SeriesEntry>,
    /// Entry-animation multiplier, 0 -> 1 while the series grows in. The
    /// rendered top edge (and therefore the baseline handed to the series
    /// above) is scaled by its current value.
    pub y_multiplier: AnimatedValue,
    pub state: EntryState,
    /// Whether the series gets a legend entry.
    pub visible_in_legend: bool,
}

impl Series {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entries: Vec::new(),
            y_multiplier: AnimatedValue::new(1.0),
            state: EntryState::Active,
            visible_in_legend: true,
        }
    }

    pub fn push(&mut self, point: DataPoint) {
        self.entries.push(SeriesEntry {
            point,
            state: EntryState::Active,
        });
    }

    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [SeriesEntry] {
        &mut self.entries
    }

    /// Count of active (not animating-out) points.
    pub fn active_len(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.state == EntryState::Active)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry carrying the finished removal id.
    pub(crate) fn splice_removal(&mut self, id: RemovalId) {
        self.entries
            .retain(|e| e.state != EntryState::Leaving(id));
    }
}

/// Which input a merged stacking entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackOrigin {
    /// The series currently being laid out.
    Current,
    /// The display list of the series immediately below in the stack.
    Previous,
}

/// One vertex of a series' computed boundary.
///
/// Ephemeral: display lists are rebuilt from scratch every layout pass. `x`
/// and `y` are cumulative data-space values (the stacked top edge), `display`
/// is the absolute screen position.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatePoint {
    pub x: f64,
    pub y: f64,
    pub display: Vec2,
    pub origin: StackOrigin,
    /// Synthetic baseline anchor, part of the fill outline only.
    pub drop_down: bool,
    /// Whether the path continues to this vertex or restarts a sub-path.
    pub line_to: bool,
    /// True for interpolated vertices that are not user data; no marker.
    pub skip_symbol: bool,
    /// Index of the source entry in the series, `None` for synthetic points.
    pub source: Option<usize>,
}

impl AggregatePoint {
    pub(crate) fn anchor(x: f64, y: f64, display: Vec2, line_to: bool) -> Self {
        Self {
            x,
            y,
            display,
            origin: StackOrigin::Current,
            drop_down: true,
            line_to,
            skip_symbol: true,
            source: None,
        }
    }
}
