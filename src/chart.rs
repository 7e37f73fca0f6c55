//! Chart model: the single source of truth for series data and the explicit
//! layout entry point.
//!
//! There are no listener chains here. The owning component mutates the model
//! through the methods below and calls [`Chart::layout`] whenever anything
//! changed (data, axis range, resize, animation tick). A layout pass is a
//! pure function of the current snapshot, so re-running it on unchanged data
//! yields identical geometry.

use eyre::{bail, Result};
use tracing::debug;

use crate::data_types::{
    AggregatePoint, DataPoint, EntryState, LegendConfig, RemovalId, Series, SeriesStyle,
    SymbolHandle,
};
use crate::plot_types::{ChartKind, LegendMarker};
use crate::rendering::SeriesGeometry;
use crate::stacking::{self, ResolvedPoint};
use crate::transform::PlotTransform;
use crate::CoordinateMapper;

struct SeriesSlot {
    series: Series,
    style: SeriesStyle,
}

pub struct Chart {
    pub kind: ChartKind,
    pub legend: LegendConfig,
    slots: Vec<SeriesSlot>,
    next_removal: u64,
    next_symbol: u64,
}

/// Result of one layout pass, in stack order (bottom first).
#[derive(Clone, Debug, Default)]
pub struct ChartLayout {
    pub series: Vec<SeriesLayout>,
}

#[derive(Clone, Debug)]
pub struct SeriesLayout {
    pub id: String,
    pub style: SeriesStyle,
    pub geometry: SeriesGeometry,
    /// The series' boundary vertices; for stacked kinds this is also the
    /// baseline the series above was laid out against.
    pub display: Vec<AggregatePoint>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub series_id: String,
    pub label: String,
    pub marker: LegendMarker,
}

impl Chart {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            legend: LegendConfig::default(),
            slots: Vec::new(),
            next_removal: 0,
            next_symbol: 0,
        }
    }

    pub fn series(&self, id: &str) -> Option<&Series> {
        self.slots
            .iter()
            .find(|s| s.series.id == id)
            .map(|s| &s.series)
    }

    pub fn series_mut(&mut self, id: &str) -> Option<&mut Series> {
        self.slots
            .iter_mut()
            .find(|s| s.series.id == id)
            .map(|s| &mut s.series)
    }

    pub fn series_ids(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.series.id.as_str())
    }

    /// Appends a series at the top of the stack. If a series with the same id
    /// is mid removal-fade, that removal is discarded and the old series
    /// spliced out first; the returned ids name the timelines the owner must
    /// stop.
    pub fn add_series(
        &mut self,
        mut series: Series,
        style: SeriesStyle,
        animated: bool,
    ) -> Result<Vec<RemovalId>> {
        let mut cancelled = Vec::new();
        if let Some(pos) = self.slots.iter().position(|s| s.series.id == series.id) {
            match self.slots[pos].series.state {
                EntryState::Leaving(id) => {
                    cancelled.push(id);
                    self.slots.remove(pos);
                }
                EntryState::Active => bail!("series already present: {}", series.id),
            }
        }
        for entry in series.entries_mut() {
            entry.point.symbol = Some(self.alloc_symbol());
        }
        if animated {
            // Grow in from the zero line; the multiplier scales the whole
            // rendered top edge until the timeline completes.
            series.y_multiplier.jump(0.0);
            series.y_multiplier.set_target(1.0);
        }
        debug!(id = %series.id, points = series.entries().len(), "series added");
        self.slots.push(SeriesSlot { series, style });
        Ok(cancelled)
    }

    /// Removes a series. Animated removal keeps it in the stack, fading its
    /// multiplier toward zero, until [`Chart::complete_removal`] is called
    /// with the returned id.
    pub fn remove_series(&mut self, id: &str, animated: bool) -> Result<Option<RemovalId>> {
        let Some(pos) = self.slots.iter().position(|s| s.series.id == id) else {
            bail!("unknown series: {id}");
        };
        if !animated {
            self.slots.remove(pos);
            debug!(id, "series removed");
            return Ok(None);
        }
        let removal = self.alloc_removal();
        let slot = &mut self.slots[pos];
        slot.series.state = EntryState::Leaving(removal);
        slot.series.y_multiplier.set_target(0.0);
        debug!(id, ?removal, "series removal animation started");
        Ok(Some(removal))
    }

    /// Appends a data point. New data arriving discards any in-flight point
    /// removals on this series and splices them out immediately; the returned
    /// ids name the timelines the owner must stop.
    pub fn push_point(
        &mut self,
        series_id: &str,
        x: f64,
        y: f64,
        animated: bool,
    ) -> Result<Vec<RemovalId>> {
        let symbol = self.alloc_symbol();
        let Some(slot) = self.slots.iter_mut().find(|s| s.series.id == series_id) else {
            bail!("unknown series: {series_id}");
        };
        let mut cancelled = Vec::new();
        slot.series.entries_mut().iter_mut().for_each(|e| {
            if let EntryState::Leaving(id) = e.state {
                if !cancelled.contains(&id) {
                    cancelled.push(id);
                }
            }
        });
        for id in &cancelled {
            slot.series.splice_removal(*id);
        }
        let mut point = if animated {
            DataPoint::entering(x, y)
        } else {
            DataPoint::new(x, y)
        };
        point.symbol = Some(symbol);
        slot.series.push(point);
        Ok(cancelled)
    }

    /// Removes the data point at `index`. Animated removal keeps the point
    /// contributing to layout until the owner reports the fade finished.
    pub fn remove_point(
        &mut self,
        series_id: &str,
        index: usize,
        animated: bool,
    ) -> Result<Option<RemovalId>> {
        let Some(pos) = self.slots.iter().position(|s| s.series.id == series_id) else {
            bail!("unknown series: {series_id}");
        };
        if index >= self.slots[pos].series.entries().len() {
            bail!("point index {index} out of range for series {series_id}");
        }
        if !animated {
            self.slots[pos].series.entries.remove(index);
            return Ok(None);
        }
        let removal = self.alloc_removal();
        self.slots[pos].series.entries[index].state = EntryState::Leaving(removal);
        Ok(Some(removal))
    }

    /// Called by the owner when a removal timeline finished: splices the
    /// affected entries (or the whole series) out of the model.
    pub fn complete_removal(&mut self, id: RemovalId) {
        self.slots
            .retain(|s| s.series.state != EntryState::Leaving(id));
        for slot in &mut self.slots {
            slot.series.splice_removal(id);
        }
    }

    /// Convenience for timeline ticks: advances every in-flight transition to
    /// `progress` in [0, 1].
    pub fn advance_animations(&mut self, progress: f64) {
        for slot in &mut self.slots {
            slot.series.y_multiplier.advance(progress);
            for entry in slot.series.entries_mut() {
                entry.point.current_x.advance(progress);
                entry.point.current_y.advance(progress);
            }
        }
    }

    /// Runs one synchronous layout pass against the given transform.
    pub fn layout(&self, transform: &PlotTransform) -> ChartLayout {
        debug!(kind = ?self.kind, series = self.slots.len(), "layout pass");
        let zero_y = transform.zero_screen_y();

        let displays: Vec<Vec<AggregatePoint>> = if self.kind.is_stacked() {
            let snapshots: Vec<Vec<ResolvedPoint>> = self
                .slots
                .iter()
                .map(|s| resolve(&s.series, transform))
                .collect();
            stacking::layout_stack(&snapshots, transform)
        } else {
            self.slots
                .iter()
                .map(|s| stacking::layout_single(&resolve(&s.series, transform), transform))
                .collect()
        };

        let mut geometries = Vec::with_capacity(self.slots.len());
        for (i, display) in displays.iter().enumerate() {
            let previous: &[AggregatePoint] = if self.kind.is_stacked() && i > 0 {
                &displays[i - 1]
            } else {
                &[]
            };
            geometries.push(self.kind.emit(display, previous, zero_y));
        }

        ChartLayout {
            series: self
                .slots
                .iter()
                .zip(displays)
                .zip(geometries)
                .map(|((slot, display), geometry)| SeriesLayout {
                    id: slot.series.id.clone(),
                    style: slot.style.clone(),
                    geometry,
                    display,
                })
                .collect(),
        }
    }

    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        if !self.legend.enabled {
            return Vec::new();
        }
        self.slots
            .iter()
            .filter(|s| s.series.visible_in_legend)
            .map(|s| LegendEntry {
                series_id: s.series.id.clone(),
                label: s.series.name.clone(),
                marker: self.kind.legend_marker(),
            })
            .collect()
    }

    fn alloc_removal(&mut self) -> RemovalId {
        self.next_removal += 1;
        RemovalId(self.next_removal)
    }

    fn alloc_symbol(&mut self) -> SymbolHandle {
        self.next_symbol += 1;
        SymbolHandle(self.next_symbol)
    }
}

/// Snapshot of a series for one layout pass: animated current values with the
/// entry multiplier applied, non-finite points dropped.
fn resolve(series: &Series, transform: &PlotTransform) -> Vec<ResolvedPoint> {
    let multiplier = series.y_multiplier.current();
    series
        .entries()
        .iter()
        .enumerate()
        .filter_map(|(source, entry)| {
            let x = transform
                .x_axis
                .to_numeric_value(entry.point.current_x.current());
            let y = entry.point.current_y.current() * multiplier;
            (x.is_finite() && y.is_finite()).then_some(ResolvedPoint { x, y, source })
        })
        .collect()
}
