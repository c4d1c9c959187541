//! アカウント作成

use crate::api::auth;
use crate::app::use_app;
use crate::components::navigation::Navigation;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use trust_wedo_common::{AppRoute, AuthOutcome, PasswordCredentials};

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (confirm_sent, set_confirm_sent) = signal(false);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let credentials =
            match PasswordCredentials::new(&email.get_untracked(), &password.get_untracked()) {
                Ok(c) => c,
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    return;
                }
            };

        set_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::sign_up(&credentials).await {
                Ok(AuthOutcome::SignedIn(session)) => {
                    ctx.sign_in(session);
                    navigate(&AppRoute::Dashboard.path(), Default::default());
                }
                Ok(AuthOutcome::ConfirmationRequired) => {
                    set_confirm_sent.set(true);
                    set_loading.set(false);
                }
                Err(e) => {
                    crate::log::warn(&format!("signup: {}", e));
                    set_error.set(Some(ctx.error_text(&e, "auth.signup.failed")));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <Navigation />
        <div class="auth-page">
            <form class="card auth-card" on:submit=on_submit>
                <h1>{move || ctx.tr("auth.signup.title")}</h1>

                <div class="form-group">
                    <label for="email">{move || ctx.tr("auth.login.email")}</label>
                    <input
                        type="email"
                        id="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="password">{move || ctx.tr("auth.login.password")}</label>
                    <input
                        type="password"
                        id="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>

                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <Show when=move || confirm_sent.get()>
                    <p class="form-success">{move || ctx.tr("auth.signup.confirm")}</p>
                </Show>

                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() {
                        ctx.tr("auth.signup.loading")
                    } else {
                        ctx.tr("auth.signup.submit")
                    }}
                </button>

                <p class="auth-switch">
                    {move || ctx.tr("auth.signup.hasAccount")} " "
                    <a href="/login">{move || ctx.tr("auth.signup.loginLink")}</a>
                </p>
            </form>
        </div>
    }
}
