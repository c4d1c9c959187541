//! クイックウィン一覧（コードはクリップボードへコピーできる）

use crate::app::use_app;
use leptos::prelude::*;
use leptos::task::spawn_local;
use trust_wedo_common::i18n::dimension_name;
use trust_wedo_common::QuickWin;
use wasm_bindgen_futures::JsFuture;

/// クリップボードへ書き込む
async fn write_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

#[component]
pub fn QuickWins(quick_wins: Vec<QuickWin>) -> impl IntoView {
    let ctx = use_app();
    let (copied, set_copied) = signal(None::<usize>);

    let cards = quick_wins
        .into_iter()
        .enumerate()
        .map(|(index, win)| {
            let dimension = win.dimension.clone();
            let snippet = win.code_snippet.clone().map(|code| {
                let on_copy = {
                    let code = code.clone();
                    move |_| {
                        let code = code.clone();
                        spawn_local(async move {
                            match write_clipboard(&code).await {
                                Ok(()) => set_copied.set(Some(index)),
                                Err(e) => crate::log::warn(&format!("clipboard: {}", e)),
                            }
                        });
                    }
                };
                view! {
                    <div class="code-block">
                        <pre><code>{code}</code></pre>
                        <button class="btn btn-small btn-secondary" on:click=on_copy>
                            {move || if copied.get() == Some(index) {
                                ctx.tr("report.quickWins.copied")
                            } else {
                                ctx.tr("report.quickWins.copy")
                            }}
                        </button>
                    </div>
                }
            });

            view! {
                <li class="quick-win">
                    <div class="quick-win-header">
                        <h3>{win.title}</h3>
                        <span class="badge">{move || dimension_name(ctx.lang(), &dimension).to_string()}</span>
                    </div>
                    <p class="quick-win-meta text-muted">
                        {move || ctx.tr("report.impact")} ": " {win.impact.clone()} " · "
                        {move || ctx.tr("report.effort")} ": " {win.effort.clone()}
                    </p>
                    <p>{win.instructions}</p>
                    {snippet}
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="card quick-wins">
            <h2>{move || ctx.tr("report.quickWins.title")}</h2>
            <p class="text-muted">{move || ctx.tr("report.quickWins.desc")}</p>
            <ul>{cards}</ul>
        </section>
    }
}
