// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mounts a bar chart and a pie chart on random data, replays a hover and a resize,
//! and writes the sampled frames to `duochart_demo.html`.

mod html;
mod svg;

use std::error::Error;
use std::time::Duration;

use duochart_charts::{
    BarChart, BarChartConfig, LayoutController, PieChart, PieChartConfig, Size,
};
use duochart_data::{GeneratorConfig, RandomSource};

use crate::html::HtmlSection;

const VIEWPORT: Size = Size::new(960.0, 540.0);
const RESIZED: Size = Size::new(640.0, 480.0);

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut source = RandomSource::new(rand::rng(), GeneratorConfig::default().with_signed(true))?;
    let bars = BarChart::from_source(&mut source, BarChartConfig::default())?;
    let pie = PieChart::from_source(&mut source, PieChartConfig::default())?;

    let sections = vec![
        bar_section(LayoutController::new(bars)),
        pie_section(LayoutController::new(pie)),
    ];
    let html = html::render_report("duochart demo", &sections);
    std::fs::write("duochart_demo.html", html)?;
    tracing::info!("wrote duochart_demo.html");
    Ok(())
}

fn bar_section(mut c: LayoutController<BarChart>) -> HtmlSection {
    let mut frames = Vec::new();
    let mut snap = |c: &LayoutController<BarChart>, size: Size, now: Duration, caption: &str| {
        let chart = c.chart();
        let svg = svg::frame_to_svg(&chart.frame(now), size, chart.origin(), Some(chart.tooltip()));
        frames.push((format!("{caption} (t = {} ms)", now.as_millis()), svg));
    };

    c.mount(&VIEWPORT, Duration::ZERO);
    for t in [0, 300, 700, 1200, 2000] {
        snap(&c, VIEWPORT, ms(t), "entrance");
    }
    let settled = c.chart().stage().settles_at().unwrap_or_default();
    snap(&c, VIEWPORT, settled, "settled");

    // Hover the first bar through its middle.
    if let Some(shape) = c.chart().shapes().first().cloned() {
        let cursor = c.chart().origin() + shape.rect.center().to_vec2();
        let now = settled + ms(100);
        c.chart_mut().pointer_moved(cursor, now);
        snap(&c, VIEWPORT, now + ms(150), "hover");
        c.chart_mut().pointer_left(now + ms(400));
        snap(&c, VIEWPORT, now + ms(550), "hover released");
    }

    let resized_at = settled + ms(1000);
    c.resize(&RESIZED, resized_at);
    snap(&c, RESIZED, resized_at + ms(400), "resized, mid-entrance");
    let settled = c.chart().stage().settles_at().unwrap_or(resized_at);
    snap(&c, RESIZED, settled, "resized, settled");

    HtmlSection {
        title: "Bar chart".into(),
        description: format!(
            "{} items. Bars bounce in one after another, labels follow; hover grows and grays a bar.",
            c.chart().dataset().len()
        ),
        frames,
    }
}

fn pie_section(mut c: LayoutController<PieChart>) -> HtmlSection {
    let mut frames = Vec::new();
    for (caption, size) in [("mounted", VIEWPORT), ("resized", RESIZED)] {
        if c.mount(&size, Duration::ZERO).is_none() {
            c.resize(&size, Duration::ZERO);
        }
        let chart = c.chart();
        let svg = svg::frame_to_svg(
            &chart.frame(Duration::ZERO),
            chart.surface_size(),
            chart.origin(),
            None,
        );
        frames.push((format!("{caption} (r = {})", chart.radius()), svg));
    }

    let labelled = c.chart().slices().iter().filter(|s| s.has_label()).count();
    HtmlSection {
        title: "Pie chart".into(),
        description: format!(
            "{} slices, {labelled} labelled. Thin slices drop their value, then their name.",
            c.chart().dataset().len()
        ),
        frames,
    }
}
