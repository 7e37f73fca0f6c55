use glam::Vec2;
use stack_chart::data_types::StackOrigin;
use stack_chart::geometry::Bounds;
use stack_chart::stacking::{self, merge, AggregateItem, ResolvedPoint};
use stack_chart::{Axis, PlotTransform};

const EPS: f64 = 1e-9;

// x: [0, 10] -> [0, 100] px, y: [0, 10] -> [400, 0] px (zero line at y=400).
fn transform() -> PlotTransform {
    PlotTransform::new(
        Axis::linear((0.0, 10.0), (0.0, 100.0)),
        Axis::linear((0.0, 10.0), (400.0, 0.0)),
        Bounds::from_size(100.0, 400.0),
    )
}

fn points(data: &[(f64, f64)]) -> Vec<ResolvedPoint> {
    data.iter()
        .enumerate()
        .map(|(source, &(x, y))| ResolvedPoint { x, y, source })
        .collect()
}

#[test]
fn two_flat_series_stack_exactly() {
    // Scenario A: S0 = [(0,1),(10,1)], S1 = [(0,2),(10,2)].
    let t = transform();
    let displays = stacking::layout_stack(
        &[points(&[(0.0, 1.0), (10.0, 1.0)]), points(&[(0.0, 2.0), (10.0, 2.0)])],
        &t,
    );

    // S0 sits on the zero line, delimited by drop-to-zero anchors.
    let s0 = &displays[0];
    assert_eq!(s0.len(), 4);
    assert!(s0[0].drop_down && s0[3].drop_down);
    assert!((s0[1].y - 1.0).abs() < EPS);
    assert!((s0[2].y - 1.0).abs() < EPS);
    assert!((s0[1].display.y - 360.0).abs() < 1e-4);
    assert_eq!(s0[0].display.y, 400.0);

    // S1's baseline is S0's top edge: cumulative y = 3, no synthetic points.
    let s1 = &displays[1];
    let real: Vec<_> = s1.iter().filter(|p| p.source.is_some()).collect();
    assert_eq!(real.len(), 2);
    for p in &real {
        assert!((p.y - 3.0).abs() < EPS);
        assert!((p.display.y - 280.0).abs() < 1e-4);
    }
}

#[test]
fn single_point_overlay_interpolates_baseline() {
    // Scenario B: S0 = [(0,1),(10,3)], S1 = [(5,2)].
    let t = transform();
    let displays = stacking::layout_stack(
        &[points(&[(0.0, 1.0), (10.0, 3.0)]), points(&[(5.0, 2.0)])],
        &t,
    );
    let s1 = &displays[1];

    // The lone data point picks up interpolate(0,1,10,3,5) = 2 as baseline.
    let data_point = s1
        .iter()
        .find(|p| p.source.is_some())
        .expect("data point emitted");
    assert!((data_point.x - 5.0).abs() < EPS);
    assert!((data_point.y - 4.0).abs() < EPS, "2 own + 2 baseline");
    assert!((data_point.display.y - 240.0).abs() < 1e-4);

    // Drop-down anchors at x = 0 and x = 10 clamp the fill to S0's shape.
    let anchors: Vec<_> = s1.iter().filter(|p| p.drop_down).collect();
    assert!(anchors.iter().any(|p| p.x == 0.0));
    assert!(anchors.iter().any(|p| p.x == 10.0));
    // The x = 10 copies track S0's boundary top (y = 3) and its zero anchor.
    assert!(anchors.iter().any(|p| p.x == 10.0 && (p.y - 3.0).abs() < EPS));

    // A baseline anchor (not zero) precedes the data point in the outline.
    let idx = s1.iter().position(|p| p.source.is_some()).unwrap();
    let lead_in = &s1[idx - 1];
    assert!(lead_in.drop_down);
    assert!((lead_in.y - 2.0).abs() < EPS);
    assert!((lead_in.display.y - 320.0).abs() < 1e-4);
}

#[test]
fn removing_middle_series_shifts_baselines_down() {
    // Scenario C: relayout after dropping S1 re-bases S2 onto S0.
    let t = transform();
    let s0 = points(&[(0.0, 1.0), (10.0, 1.0)]);
    let s1 = points(&[(0.0, 2.0), (10.0, 2.0)]);
    let s2 = points(&[(0.0, 1.5), (10.0, 1.5)]);

    let before = stacking::layout_stack(&[s0.clone(), s1, s2.clone()], &t);
    let top_before: Vec<f64> = before[2]
        .iter()
        .filter(|p| p.source.is_some())
        .map(|p| p.y)
        .collect();
    assert!(top_before.iter().all(|y| (y - 4.5).abs() < EPS));

    let after = stacking::layout_stack(&[s0, s2], &t);
    let top_after: Vec<f64> = after[1]
        .iter()
        .filter(|p| p.source.is_some())
        .map(|p| p.y)
        .collect();
    assert!(top_after.iter().all(|y| (y - 2.5).abs() < EPS));
}

#[test]
fn cumulative_invariant_on_shared_grid() {
    let t = transform();
    let grid = [0.0, 2.5, 5.0, 7.5, 10.0];
    let series: Vec<Vec<ResolvedPoint>> = (1..=3)
        .map(|k| points(&grid.map(|x| (x, k as f64 * 0.7)).to_vec()))
        .collect();
    let displays = stacking::layout_stack(&series, &t);

    for i in 1..displays.len() {
        for p in displays[i].iter().filter(|p| p.source.is_some()) {
            let below = displays[i - 1]
                .iter()
                .filter(|q| q.source.is_some())
                .find(|q| (q.x - p.x).abs() < EPS)
                .expect("shared grid point below");
            let own = series[i][p.source.unwrap()].y;
            assert!((p.y - (below.y + own)).abs() < EPS);
        }
    }
}

#[test]
fn bottom_series_baseline_is_axis_zero() {
    let t = transform();
    let displays = stacking::layout_stack(&[points(&[(0.0, 2.0), (5.0, 4.0), (10.0, 1.0)])], &t);
    for anchor in displays[0].iter().filter(|p| p.drop_down) {
        assert_eq!(anchor.display.y, t.zero_screen_y());
        assert_eq!(anchor.y, 0.0);
    }
    for p in displays[0].iter().filter(|p| p.source.is_some()) {
        // Unstacked: display position is the plain projection.
        assert!((p.display.y - t.y_to_screen(p.y)).abs() < 1e-4);
    }
}

#[test]
fn layout_is_idempotent() {
    let t = transform();
    let series = vec![
        points(&[(0.0, 1.0), (4.0, 2.0), (10.0, 3.0)]),
        points(&[(2.0, 1.0), (8.0, 2.0)]),
    ];
    let first = stacking::layout_stack(&series, &t);
    let second = stacking::layout_stack(&series, &t);
    assert_eq!(first, second);
}

#[test]
fn disjoint_x_series_tracks_interpolated_baseline() {
    let t = transform();
    let displays = stacking::layout_stack(
        &[points(&[(0.0, 1.0), (10.0, 1.0)]), points(&[(2.0, 1.0), (8.0, 1.0)])],
        &t,
    );
    let s1 = &displays[1];

    // No x in common, yet both data points sit on the interpolated baseline.
    for p in s1.iter().filter(|p| p.source.is_some()) {
        assert!((p.y - 2.0).abs() < EPS);
    }
    // And the lower boundary's own vertices clamp the outline at x=0 and 10.
    assert!(s1.iter().any(|p| p.drop_down && p.x == 0.0));
    assert!(s1.iter().any(|p| p.drop_down && p.x == 10.0));
}

#[test]
fn series_beyond_previous_range_restarts_subpath() {
    let t = transform();
    let displays = stacking::layout_stack(
        &[points(&[(0.0, 1.0), (3.0, 1.0)]), points(&[(6.0, 2.0), (9.0, 2.0)])],
        &t,
    );
    let s1 = &displays[1];

    // S1 lies wholly right of S0: its data stacks on the zero line.
    for p in s1.iter().filter(|p| p.source.is_some()) {
        assert!((p.y - 2.0).abs() < EPS);
    }
    // The copied boundary and the new run share no x, so the run-start
    // anchor opens a fresh sub-path.
    let restart = s1
        .iter()
        .position(|p| p.drop_down && p.origin == StackOrigin::Current)
        .expect("run-start anchor");
    assert!(!s1[restart].line_to);
    assert!(restart > 0, "previous-origin copies come first");
}

#[test]
fn aggregate_orders_previous_before_current_at_equal_x() {
    let t = transform();
    let lower = stacking::layout_stack(&[points(&[(0.0, 1.0), (10.0, 1.0)])], &t);
    let merged = merge(&points(&[(0.0, 2.0), (10.0, 2.0)]), &lower[0]);

    let xs: Vec<(f64, bool)> = merged.iter().map(|it| (it.x(), it.is_current())).collect();
    assert!(xs.windows(2).all(|w| w[0].0 <= w[1].0), "sorted by x");
    for window in merged.windows(2) {
        if window[0].x() == window[1].x() {
            // Previous-origin entries always sort first at equal x.
            assert!(!(window[0].is_current() && !window[1].is_current()));
        }
    }
    assert!(matches!(merged.first(), Some(AggregateItem::Previous(_))));
}

#[test]
fn empty_current_passes_previous_through() {
    let t = transform();
    let lower = stacking::layout_stack(&[points(&[(0.0, 1.0), (10.0, 2.0)])], &t);
    let merged = merge(&[], &lower[0]);
    assert_eq!(merged.len(), lower[0].len());

    let displays = stacking::layout_stack(&[points(&[(0.0, 1.0), (10.0, 2.0)]), vec![]], &t);
    // Every vertex of the empty overlay keeps the lower boundary's position,
    // so the series above sees an unchanged baseline.
    assert_eq!(displays[1].len(), displays[0].len());
    for (a, b) in displays[1].iter().zip(displays[0].iter()) {
        assert_eq!(a.display, b.display);
        assert!((a.y - b.y).abs() < EPS);
    }
}

#[test]
fn sub_pixel_spacing_collapses_to_a_finite_baseline() {
    // Distinct data x values less than a pixel apart map to the same f32
    // screen position; the baseline must still come out finite.
    let t = PlotTransform::new(
        Axis::linear((0.0, 100.0), (0.0, 1000.0)),
        Axis::linear((0.0, 10.0), (400.0, 0.0)),
        Bounds::from_size(1000.0, 400.0),
    );
    let displays = stacking::layout_stack(
        &[
            points(&[(50.0, 1.0), (50.000001, 2.0)]),
            points(&[(50.0000005, 1.0)]),
        ],
        &t,
    );

    for display in &displays {
        for p in display {
            assert!(p.display.x.is_finite() && p.display.y.is_finite());
        }
    }
    let data_point = displays[1]
        .iter()
        .find(|p| p.source.is_some())
        .expect("data point emitted");
    // Own 1.0 on the interpolated 1.5 baseline; the x deltas are tiny, so
    // the division is only good to a few ulps.
    assert!((data_point.y - 2.5).abs() < 1e-6);
}

#[test]
fn single_point_series_is_degenerate_but_valid() {
    let t = transform();
    let displays = stacking::layout_stack(&[points(&[(5.0, 2.0)])], &t);
    let s0 = &displays[0];
    let real: Vec<_> = s0.iter().filter(|p| p.source.is_some()).collect();
    assert_eq!(real.len(), 1);
    assert_eq!(real[0].display, Vec2::new(50.0, 320.0));
    // Anchors on both sides of the lone point collapse the fill to zero area.
    assert_eq!(s0.iter().filter(|p| p.drop_down).count(), 2);
}
