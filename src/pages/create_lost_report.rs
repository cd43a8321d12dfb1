//! Create-lost-report page: files a new lost-pet report.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::remote_data::{Method, RemoteData, RequestConfig};
#[cfg(feature = "hydrate")]
use crate::net::types::LostReport;
use crate::state::session::SessionState;

#[component]
pub fn CreateLostReportPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let remote = RemoteData::new(Some(session_signal));
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let pet_name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let date_lost = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = pet_name.get_untracked();
        if name.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let config = RequestConfig::new(api::lost_reports_url())
                    .method(Method::Post)
                    .authenticated()
                    .body(serde_json::json!({
                        "petName": name.trim(),
                        "description": super::non_empty(&description.get_untracked()),
                        "location": super::non_empty(&location.get_untracked()),
                        "dateLost": super::non_empty(&date_lost.get_untracked()),
                    }));
                let Ok(value) = remote.send(&config).await else {
                    return;
                };
                if let Ok(report) = api::decode::<LostReport>(value) {
                    navigate(&format!("/lost/{}", report.id), NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    };

    view! {
        <div class="create-lost-report-page">
            <h1>"Report a lost pet"</h1>
            <form class="report-form" on:submit=submit>
                <label class="report-form__label">
                    "Pet name"
                    <input
                        class="report-form__input"
                        type="text"
                        prop:value=move || pet_name.get()
                        on:input=move |ev| pet_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="report-form__label">
                    "Description (optional)"
                    <textarea
                        class="report-form__textarea"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="report-form__label">
                    "Last seen near (optional)"
                    <input
                        class="report-form__input"
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="report-form__label">
                    "Missing since (optional)"
                    <input
                        class="report-form__input"
                        type="date"
                        prop:value=move || date_lost.get()
                        on:input=move |ev| date_lost.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    remote
                        .error
                        .get()
                        .map(|err| view! { <p class="report-form__error">{err.to_string()}</p> })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || remote.loading.get()>
                    {move || if remote.loading.get() { "Filing report..." } else { "File report" }}
                </button>
            </form>
        </div>
    }
}
