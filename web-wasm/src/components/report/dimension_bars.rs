//! 維度ごとの進捗バーと明細

use crate::app::use_app;
use leptos::prelude::*;
use std::collections::BTreeMap;
use trust_wedo_common::i18n::{dimension_name, item_name};
use trust_wedo_common::report::{percentage, scored_dimensions, ScoreBand};
use trust_wedo_common::types::DimensionItem;
use trust_wedo_common::DimensionScore;

#[component]
fn ItemRow(item: DimensionItem) -> impl IntoView {
    let ctx = use_app();
    let name = item.name.clone();
    let suggestion = item
        .suggestion
        .clone()
        .filter(|_| item.status.wants_suggestion());

    view! {
        <li class="dimension-item">
            <span class="item-mark">{item.status.mark()}</span>
            <span class="item-name">{move || item_name(ctx.lang(), &name).to_string()}</span>
            <span class="item-score">{format!("{:.0}/{:.0}", item.score, item.max)}</span>
            {item.details.map(|d| view! { <p class="item-details text-muted">{d}</p> })}
            {suggestion.map(|s| view! { <p class="item-suggestion">"💡 " {s}</p> })}
        </li>
    }
}

#[component]
pub fn DimensionBars(dimensions: BTreeMap<String, DimensionScore>) -> impl IntoView {
    let ctx = use_app();

    let rows = scored_dimensions(&dimensions)
        .map(|(key, dim)| {
            let key = key.clone();
            let pct = percentage(dim.score, dim.max);
            let band = ScoreBand::for_bar(pct as f64);
            let items = dim.items.clone();
            view! {
                <div class="dimension-row">
                    <div class="dimension-header">
                        <span class="dimension-name">
                            {move || dimension_name(ctx.lang(), &key).to_string()}
                        </span>
                        <span class="dimension-score">
                            {format!("{:.0}/{:.0} ({}%)", dim.score, dim.max, pct)}
                        </span>
                    </div>
                    <div class="bar">
                        <div
                            class=format!("bar-fill bar-{}", band.class_suffix())
                            style=format!("width: {}%", pct)
                        />
                    </div>
                    <ul class="dimension-items">
                        {items.into_iter().map(|item| view! { <ItemRow item=item /> }).collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="card dimension-bars">
            <h2>{move || ctx.tr("report.dimensions")}</h2>
            {rows}
        </section>
    }
}
