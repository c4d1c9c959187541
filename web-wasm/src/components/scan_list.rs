//! スキャン履歴の一覧

use crate::app::use_app;
use leptos::prelude::*;
use trust_wedo_common::i18n::status_label;
use trust_wedo_common::routes::report_path;
use trust_wedo_common::{ScanJob, ScanStatus};

/// `2024-05-01T12:34:56Z` を `2024-05-01 12:34` にする
fn short_timestamp(raw: &str) -> String {
    raw.replace('T', " ").chars().take(16).collect()
}

#[component]
pub fn ScanList(
    scans: ReadSignal<Vec<ScanJob>>,
    #[prop(optional)] limit: Option<usize>,
) -> impl IntoView {
    let ctx = use_app();
    let visible = move || {
        let all = scans.get();
        match limit {
            Some(n) => all.into_iter().take(n).collect(),
            None => all,
        }
    };

    view! {
        <Show
            when=move || !scans.get().is_empty()
            fallback=move || view! { <p class="text-muted">{move || ctx.tr("scans.empty")}</p> }
        >
            <table class="scan-table">
                <tbody>
                    <For
                        each=visible
                        key=|job: &ScanJob| (job.id.clone(), job.status)
                        let:job
                    >
                        {
                            let status = job.status;
                            let link = (status == ScanStatus::Completed).then(|| report_path(&job.id));
                            view! {
                                <tr>
                                    <td class="scan-url">{job.url.clone()}</td>
                                    <td class="scan-date">{short_timestamp(&job.created_at)}</td>
                                    <td>
                                        <span class=format!("badge badge-{}", status.as_str())>
                                            {move || status_label(ctx.lang(), status)}
                                        </span>
                                    </td>
                                    <td>
                                        {link.map(|href| view! {
                                            <a href=href class="btn btn-small btn-secondary">"→"</a>
                                        })}
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
        </Show>
    }
}
