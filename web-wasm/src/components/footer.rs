//! フッター

use crate::app::use_app;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app();

    view! {
        <footer class="footer">
            <div class="footer-columns">
                <div>
                    <h4>{move || ctx.tr("footer.product")}</h4>
                    <a href="/pricing">{move || ctx.tr("nav.pricing")}</a>
                    <a href="/docs">{move || ctx.tr("nav.docs")}</a>
                </div>
                <div>
                    <h4>{move || ctx.tr("footer.company")}</h4>
                    <span>"Trust WEDO"</span>
                </div>
            </div>
            <p class="footer-rights">"© Trust WEDO. " {move || ctx.tr("footer.rights")}</p>
        </footer>
    }
}
