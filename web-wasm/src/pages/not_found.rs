use crate::app::use_app;
use crate::components::navigation::Navigation;
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = use_app();

    view! {
        <Navigation />
        <div class="not-found">
            <h1>"404"</h1>
            <p>{move || ctx.tr("notFound.title")}</p>
            <a href="/" class="btn btn-primary">{move || ctx.tr("notFound.back")}</a>
        </div>
    }
}
