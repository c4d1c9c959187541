//! 維度のレーダーチャート（SVG）

use crate::app::use_app;
use leptos::prelude::*;
use std::collections::BTreeMap;
use trust_wedo_common::chart::{svg_points, Radar};
use trust_wedo_common::i18n::dimension_name;
use trust_wedo_common::report::{percentage, scored_dimensions};
use trust_wedo_common::DimensionScore;

const SIZE: f64 = 320.0;
const RADIUS: f64 = 110.0;
const LABEL_OFFSET: f64 = 18.0;

#[component]
pub fn RadarChart(dimensions: BTreeMap<String, DimensionScore>) -> impl IntoView {
    let ctx = use_app();
    let radar = Radar::new(SIZE / 2.0, SIZE / 2.0, RADIUS);

    let axes: Vec<(String, f64)> = scored_dimensions(&dimensions)
        .map(|(key, dim)| (key.clone(), percentage(dim.score, dim.max) as f64))
        .collect();
    let n = axes.len();

    // 3軸未満では多角形にならない
    if n < 3 {
        return None;
    }

    let rings = radar
        .grid_rings(n)
        .into_iter()
        .map(|ring| view! { <polygon class="radar-ring" points=svg_points(&ring) /> })
        .collect_view();

    let spokes = (0..n)
        .map(|i| {
            let (x, y) = radar.point(i, n, 100.0);
            view! {
                <line
                    class="radar-spoke"
                    x1=radar.cx.to_string()
                    y1=radar.cy.to_string()
                    x2=format!("{:.1}", x)
                    y2=format!("{:.1}", y)
                />
            }
        })
        .collect_view();

    let values: Vec<f64> = axes.iter().map(|(_, v)| *v).collect();
    let data = svg_points(&radar.polygon(&values));

    let labels = axes
        .into_iter()
        .enumerate()
        .map(|(i, (key, _))| {
            let (x, y, anchor) = radar.label(i, n, LABEL_OFFSET);
            view! {
                <text
                    class="radar-label"
                    x=format!("{:.1}", x)
                    y=format!("{:.1}", y)
                    text-anchor=anchor.as_svg()
                    dominant-baseline="middle"
                >
                    {move || dimension_name(ctx.lang(), &key).to_string()}
                </text>
            }
        })
        .collect_view();

    Some(view! {
        <section class="card radar-chart">
            <h2>{move || ctx.tr("report.radarTitle")}</h2>
            <p class="text-muted">{move || ctx.tr("report.radarHint")}</p>
            <svg viewBox=format!("0 0 {} {}", SIZE, SIZE) class="radar-svg">
                {rings}
                {spokes}
                <polygon class="radar-data" points=data />
                {labels}
            </svg>
        </section>
    })
}
