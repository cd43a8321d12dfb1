//! Sign-in page: credentials form feeding the session store.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::remote_data::{Method, RemoteData, RequestConfig};
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::session::{self, UserData};

/// Sign-in form. On success the session store is updated and persisted and
/// the user lands back on the home page.
#[component]
pub fn SigninPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let remote = RemoteData::new(None);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let config = RequestConfig::new(api::signin_url())
                    .method(Method::Post)
                    .body(serde_json::json!({ "username": user.trim(), "password": pass }));
                let Ok(value) = remote.send(&config).await else {
                    return;
                };
                let Ok(user_data) = api::decode::<UserData>(value) else {
                    leptos::logging::warn!("unexpected sign-in response shape");
                    return;
                };
                session_signal.update(|s| s.sign_in(user_data));
                session::persist(&session_signal.get_untracked());
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass, session_signal);
        }
    };

    view! {
        <div class="signin-page">
            <h1>"Sign in"</h1>
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
                    {move || if remote.loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="signin-page__hint">"No account yet? " <a href="/signup">"Sign up"</a></p>
        </div>
    }
}
