//! Sign-up page: account creation form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::remote_data::{Method, RemoteData, RequestConfig};

/// Sign-up form. A created account is not signed in automatically; the user
/// is sent to the sign-in page.
#[component]
pub fn SignupPage() -> impl IntoView {
    let remote = RemoteData::new(None);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let mail = email.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || mail.trim().is_empty() || pass.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let config = RequestConfig::new(api::signup_url()).method(Method::Post).body(
                    serde_json::json!({
                        "username": user.trim(),
                        "email": mail.trim(),
                        "password": pass,
                    }),
                );
                if remote.send(&config).await.is_ok() {
                    navigate("/signin", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, mail, pass);
        }
    };

    view! {
        <div class="signup-page">
            <h1>"Sign up"</h1>
            <form class="auth-form" on:submit=submit>
                <label class="auth-form__label">
                    "Username"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    remote
                        .error
                        .get()
                        .map(|err| view! { <p class="auth-form__error">{err.to_string()}</p> })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || remote.loading.get()>
                    {move || if remote.loading.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>
        </div>
    }
}
