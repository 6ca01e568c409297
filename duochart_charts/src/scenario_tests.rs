// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end checks across data, scales, marks, and the layout controller.

extern crate std;

use alloc::vec::Vec;
use core::f64::consts::TAU;
use core::time::Duration;

use duochart_core::{Frame, MarkPayload};
use duochart_data::{Dataset, Share, StaticSource};
use kurbo::Rect;

use crate::{
    BarChart, BarChartConfig, ControllerState, Layer, LayoutController, PieChart,
    PieChartConfig, Size,
};

const SETTLED: Duration = Duration::from_secs(10);

fn bar_rects(frame: &Frame) -> Vec<Rect> {
    frame
        .layer(Layer::Bars.raw())
        .filter_map(|m| m.payload.as_rect().map(|r| r.rect))
        .collect()
}

fn mounted_bars(pairs: &[(&str, f64)], size: Size) -> LayoutController<BarChart> {
    let ds = Dataset::from_pairs(pairs.iter().copied()).unwrap();
    let mut c = LayoutController::new(BarChart::new(ds, BarChartConfig::default()).unwrap());
    c.mount(&size, Duration::ZERO);
    c
}

fn mounted_pie(pairs: &[(&str, f64)], size: Size) -> LayoutController<PieChart> {
    let ds = Dataset::from_pairs(pairs.iter().copied()).unwrap();
    let mut c = LayoutController::new(PieChart::new(ds, PieChartConfig::default()).unwrap());
    c.mount(&size, Duration::ZERO);
    c
}

#[test]
fn positive_and_negative_bars_share_a_baseline() {
    let c = mounted_bars(&[("A", 10.0), ("B", -5.0)], Size::new(100.0, 100.0));
    let chart = c.chart();
    let y = &chart.scales().expect("drawn").y;
    let rects = bar_rects(&chart.frame(SETTLED));
    assert_eq!(rects.len(), 2);

    let (a, b) = (rects[0], rects[1]);
    // A grows up from zero, B grows down from it.
    assert_eq!(a.y0, y.map(10.0));
    assert_eq!(a.y1, y.map(0.0));
    assert_eq!(b.y0, y.map(0.0));
    assert_eq!(b.y1, y.map(-5.0));
    assert_eq!(b.height(), 0.5 * a.height());
    for (r, v) in [(a, 10.0), (b, -5.0)] {
        assert_eq!(r.height(), (y.map(v) - y.map(0.0)).abs());
    }
}

#[test]
fn thin_pie_slice_keeps_its_name_and_drops_its_value() {
    let c = mounted_pie(&[("A", 1.0), ("B", 99.0)], Size::new(100.0, 100.0));
    let chart = c.chart();
    assert_eq!(chart.dataset().total(), 100.0);
    let s = chart.slices();
    // 0.02π ≈ 0.063 rad: over the name threshold, under the value threshold.
    assert!((s[0].angles.span() - 0.02 * core::f64::consts::PI).abs() < 1e-12);
    assert!(s[0].shows_name);
    assert!(!s[0].shows_value);
    assert!(s[1].shows_name && s[1].shows_value);

    let frame = chart.frame(Duration::ZERO);
    let text = |row| {
        frame
            .get(Layer::SliceLabels.id(row))
            .and_then(|m| m.payload.as_text())
            .map(|t| t.text())
    };
    assert_eq!(text(0).as_deref(), Some("A"));
    assert_eq!(text(1).as_deref(), Some("B\n99"));
}

#[test]
fn slivers_get_no_label_mark() {
    let c = mounted_pie(&[("A", 0.5), ("B", 99.5)], Size::new(100.0, 100.0));
    let chart = c.chart();
    assert!(!chart.slices()[0].has_label());
    let frame = chart.frame(Duration::ZERO);
    assert!(frame.get(Layer::SliceLabels.id(0)).is_none());
    assert!(frame.get(Layer::Slices.id(0)).is_some());
    assert_eq!(frame.layer(Layer::SliceLabels.raw()).count(), 1);
}

#[test]
fn label_thresholds_are_strict() {
    let ds = Dataset::from_pairs([("A", 1.0), ("B", 1.0)]).unwrap();
    // Each slice spans exactly π.
    let config = PieChartConfig::default().with_thresholds(TAU / 2.0, TAU / 2.0);
    let mut c = LayoutController::new(PieChart::new(ds, config).unwrap());
    c.mount(&Size::new(10.0, 10.0), Duration::ZERO);
    assert!(c.chart().slices().iter().all(|s| !s.has_label()));
}

#[test]
fn slice_spanning_exactly_the_name_threshold_stays_unlabelled() {
    // Magnitudes sum to a full turn, so each span equals its magnitude.
    let pie = mounted_pie(&[("A", 0.05), ("B", TAU - 0.05)], Size::new(100.0, 100.0));
    let slices = pie.chart().slices();
    let threshold = PieChartConfig::default().name_min_span;
    assert!((slices[0].angles.span() - threshold).abs() < 1e-15);
    assert!(!slices[0].shows_name);
    assert!(!slices[0].has_label());
    assert!(slices[1].shows_name && slices[1].shows_value);
    let frame = pie.chart().frame(Duration::ZERO);
    assert!(frame.get(Layer::SliceLabels.id(0)).is_none());
}

#[test]
fn empty_dataset_draws_nothing() {
    let mut bars = mounted_bars(&[], Size::new(100.0, 100.0));
    let frame = bars.chart().frame(SETTLED);
    assert!(bar_rects(&frame).is_empty());
    assert_eq!(frame.layer(Layer::BarLabels.raw()).count(), 0);
    assert_eq!(bars.chart().dataset().total(), 0.0);
    assert_eq!(bars.chart().dataset().share(0), Share::Undefined);

    let t = bars
        .chart_mut()
        .pointer_moved(kurbo::Point::new(50.0, 50.0), SETTLED);
    assert!(!t.is_visible());
    assert!(!bars.chart_mut().mouse_move(0, kurbo::Point::ZERO).is_visible());

    let pie = mounted_pie(&[], Size::new(100.0, 100.0));
    assert!(pie.chart().frame(Duration::ZERO).is_empty());
}

#[test]
fn all_negative_values_collapse_onto_the_baseline() {
    let c = mounted_bars(&[("A", -4.0), ("B", -2.0)], Size::new(100.0, 100.0));
    let rects = bar_rects(&c.chart().frame(SETTLED));
    // Degenerate domain [0, 0]: everything maps to the range start.
    for r in rects {
        assert_eq!(r.height(), 0.0);
        assert!(r.y0.is_finite());
    }
}

#[test]
fn shares_sum_over_absolute_values() {
    let ds = Dataset::from_pairs([("A", 3.0), ("B", -1.0)]).unwrap();
    assert_eq!(ds.share(0), Share::Percent(75.0));
    assert_eq!(ds.share(1), Share::Percent(25.0));
}

#[test]
fn redraw_with_same_inputs_is_idempotent() {
    let mut c = mounted_bars(&[("A", 10.0), ("B", -5.0), ("C", 7.0)], Size::new(200.0, 120.0));
    let first = c.chart().frame(SETTLED);
    c.resize(&Size::new(200.0, 120.0), SETTLED);
    let second = c.chart().frame(SETTLED * 2);
    assert_eq!(first.marks, second.marks);

    let mut p = mounted_pie(&[("A", 1.0), ("B", 2.0)], Size::new(80.0, 60.0));
    let first = p.chart().frame(Duration::ZERO);
    p.resize(&Size::new(80.0, 60.0), SETTLED);
    assert_eq!(first.marks, p.chart().frame(SETTLED).marks);
}

#[test]
fn resize_recomputes_bands_only() {
    let mut c = mounted_bars(&[("A", 10.0), ("B", -5.0)], Size::new(100.0, 100.0));
    let before = bar_rects(&c.chart().frame(SETTLED));
    let stats = c.resize(&Size::new(160.0, 100.0), SETTLED).expect("mounted");
    assert_eq!(stats.exited, stats.entered);
    assert_eq!(c.state(), ControllerState::Drawn);

    let after = bar_rects(&c.chart().frame(SETTLED * 2));
    // Inner width grew from 40 to 100; heights are unchanged.
    assert!(after[0].width() > before[0].width());
    assert!(after[1].x0 > before[1].x0);
    assert_eq!(after[0].height(), before[0].height());
    assert_eq!(after[1].height(), before[1].height());
    assert_eq!(c.chart().dataset().names().collect::<Vec<_>>(), ["A", "B"]);
}

#[test]
fn resize_mid_entrance_restarts_the_cascade() {
    let mut c = mounted_bars(&[("A", 10.0), ("B", -5.0)], Size::new(100.0, 100.0));
    let mid = Duration::from_millis(500);
    c.resize(&Size::new(120.0, 100.0), mid);
    let chart = c.chart();
    assert!(chart.is_animating(mid));
    // The new entrance starts flat at the baseline.
    let baseline = chart.scales().expect("drawn").baseline();
    let a = bar_rects(&chart.frame(mid))[0];
    assert_eq!((a.y0, a.y1), (baseline, baseline));
}

#[test]
fn pie_angles_cover_the_full_turn() {
    let c = mounted_pie(
        &[("A", 3.0), ("B", -7.0), ("C", 11.0), ("D", 13.0)],
        Size::new(300.0, 300.0),
    );
    let s = c.chart().slices();
    assert_eq!(s[0].angles.start, 0.0);
    assert_eq!(s[3].angles.end, TAU);
    for pair in s.windows(2) {
        assert_eq!(pair[0].angles.end, pair[1].angles.start);
    }
    let total = c.chart().dataset().total();
    for (slice, item) in s.iter().zip(c.chart().dataset().items()) {
        let expected = TAU * item.absolute_value() / total;
        assert!((slice.angles.span() - expected).abs() < 1e-12);
    }
}

#[test]
fn charts_load_from_a_source_once() {
    let items = Dataset::from_pairs([("A", 2.0), ("B", 3.0)])
        .unwrap()
        .items()
        .to_vec();
    let mut source = StaticSource(items);
    let bars = BarChart::from_source(&mut source, BarChartConfig::default()).unwrap();
    let pie = PieChart::from_source(&mut source, PieChartConfig::default()).unwrap();
    assert_eq!(bars.dataset(), pie.dataset());
}

#[test]
fn bars_and_labels_are_paired_by_row() {
    let c = mounted_bars(&[("A", 10.0), ("B", -5.0)], Size::new(100.0, 100.0));
    let frame = c.chart().frame(SETTLED);
    for row in 0..2 {
        let bar = frame.get(Layer::Bars.id(row)).expect("bar");
        let label = frame.get(Layer::BarLabels.id(row)).expect("label");
        let MarkPayload::Rect(r) = &bar.payload else {
            panic!("bars are rects");
        };
        let MarkPayload::Text(t) = &label.payload else {
            panic!("labels are text");
        };
        assert_eq!(t.pos.x, r.rect.center().x);
    }
}
