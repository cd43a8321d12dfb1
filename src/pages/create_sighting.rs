//! Create-sighting page: attaches a sighting to a lost-pet report.
//!
//! Deliberately public: passers-by should not need an account to report
//! that they saw someone's pet.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::remote_data::{Method, RemoteData, RequestConfig};

#[component]
pub fn CreateSightingPage() -> impl IntoView {
    let remote = RemoteData::new(None);
    let params = use_params_map();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let location = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let seen_at = location.get_untracked();
        if seen_at.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let report_id = params.read_untracked().get("id").unwrap_or_default();
                let config = RequestConfig::new(api::sightings_url(&report_id))
                    .method(Method::Post)
                    .body(serde_json::json!({
                        "location": seen_at.trim(),
                        "description": super::non_empty(&description.get_untracked()),
                    }));
                if remote.send(&config).await.is_ok() {
                    navigate(&format!("/lost/{report_id}"), NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (seen_at, params);
        }
    };

    view! {
        <div class="create-sighting-page">
            <h1>"Report a sighting"</h1>
            <form class="report-form" on:submit=submit>
                <label class="report-form__label">
                    "Where did you see the pet?"
                    <input
                        class="report-form__input"
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="report-form__label">
                    "Details (optional)"
                    <textarea
                        class="report-form__textarea"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                {move || {
                    remote
                        .error
                        .get()
                        .map(|err| view! { <p class="report-form__error">{err.to_string()}</p> })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || remote.loading.get()>
                    {move || if remote.loading.get() { "Sending..." } else { "Send sighting" }}
                </button>
            </form>
        </div>
    }
}
