//! スキャン一覧と新規作成

use super::dashboard::{load_scans, url_error_text};
use crate::api::ApiClient;
use crate::app::use_app;
use crate::components::dashboard_layout::DashboardLayout;
use crate::components::scan_list::ScanList;
use leptos::prelude::*;
use leptos::task::spawn_local;
use trust_wedo_common::{CreateScanRequest, ScanJob};

#[component]
pub fn ScansPage() -> impl IntoView {
    let ctx = use_app();
    let (url, set_url) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (creating, set_creating) = signal(false);
    let (scans, set_scans) = signal(Vec::<ScanJob>::new());

    load_scans(ctx, set_scans);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let input = url.get_untracked();
        let request = match CreateScanRequest::new(&input) {
            Ok(r) => r,
            Err(e) => {
                set_error.set(Some(url_error_text(ctx, &input, &e)));
                return;
            }
        };
        let token = match ctx.access_token() {
            Ok(t) => t,
            Err(e) => {
                set_error.set(Some(ctx.error_text(&e, "auth.sessionExpired")));
                return;
            }
        };

        set_creating.set(true);
        spawn_local(async move {
            match ApiClient::new(&token).create_scan(&request).await {
                Ok(job) => {
                    crate::log::info(&format!("scan {} created", job.id));
                    set_url.set(String::new());
                    load_scans(ctx, set_scans);
                }
                Err(e) => {
                    set_error.set(Some(ctx.error_text(&e, "dashboard.error.createFailed")));
                }
            }
            set_creating.set(false);
        });
    };

    view! {
        <DashboardLayout>
            <div class="dashboard-header">
                <h1>{move || ctx.tr("dashboard.nav.scans")}</h1>
                <p class="text-muted">{move || ctx.tr("scans.subtitle")}</p>
            </div>

            <form class="card scan-form" on:submit=on_submit>
                <h2>{move || ctx.tr("scans.newScan")}</h2>
                <div class="scan-form-row">
                    <input
                        type="text"
                        placeholder="https://example.com"
                        prop:value=move || url.get()
                        on:input=move |ev| set_url.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary" disabled=move || creating.get()>
                        {move || if creating.get() {
                            ctx.tr("scans.creating")
                        } else {
                            ctx.tr("scans.create")
                        }}
                    </button>
                </div>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            </form>

            <section class="card">
                <h2>{move || ctx.tr("scans.recent")}</h2>
                <ScanList scans=scans />
            </section>
        </DashboardLayout>
    }
}
