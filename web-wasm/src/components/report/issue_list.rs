//! 問題点と改善提案

use crate::app::use_app;
use leptos::prelude::*;
use trust_wedo_common::types::{Issue, Suggestion};

#[component]
pub fn IssueList(issues: Vec<Issue>) -> impl IntoView {
    let ctx = use_app();

    view! {
        <section class="card issues">
            <h2>{move || ctx.tr("report.issues")}</h2>
            <ul>
                {issues
                    .into_iter()
                    .map(|issue| view! {
                        <li class=format!("issue severity-{}", issue.severity.to_lowercase())>
                            <h3>{issue.title}</h3>
                            <p>{issue.description}</p>
                            {issue.why.map(|why| view! { <p class="text-muted">{why}</p> })}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn SuggestionList(suggestions: Vec<Suggestion>) -> impl IntoView {
    let ctx = use_app();

    view! {
        <section class="card suggestions">
            <h2>{move || ctx.tr("report.suggestions")}</h2>
            <ol>
                {suggestions
                    .into_iter()
                    .map(|s| view! {
                        <li class="suggestion">
                            <h3>{s.action}</h3>
                            <p class="text-muted">
                                {move || ctx.tr("report.priority")} ": " {s.priority.clone()} " · "
                                {move || ctx.tr("report.impact")} ": " {s.impact.clone()} " · "
                                {move || ctx.tr("report.effort")} ": " {s.effort.clone()}
                            </p>
                            {s.impact_desc.map(|d| view! { <p>{d}</p> })}
                            <ul class="how-to">
                                {s.how_to.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
                            </ul>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
