//! Add-pet page: registers a pet under the signed-in owner.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::remote_data::{Method, RemoteData, RequestConfig};
#[cfg(feature = "hydrate")]
use crate::net::types::Pet;
use crate::state::session::SessionState;

#[component]
pub fn AddPetPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let remote = RemoteData::new(Some(session_signal));
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let species = RwSignal::new(String::new());
    let breed = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let pet_name = name.get_untracked();
        let pet_species = species.get_untracked();
        if pet_name.trim().is_empty() || pet_species.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let config = RequestConfig::new(api::pets_url())
                    .method(Method::Post)
                    .authenticated()
                    .body(serde_json::json!({
                        "name": pet_name.trim(),
                        "species": pet_species.trim(),
                        "breed": super::non_empty(&breed.get_untracked()),
                        "description": super::non_empty(&description.get_untracked()),
                    }));
                let Ok(value) = remote.send(&config).await else {
                    return;
                };
                if let Ok(pet) = api::decode::<Pet>(value) {
                    navigate(&format!("/pets/{}", pet.id), NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (pet_name, pet_species);
        }
    };

    view! {
        <div class="add-pet-page">
            <h1>"Add a pet"</h1>
            <form class="report-form" on:submit=submit>
                <label class="report-form__label">
                    "Name"
                    <input
                        class="report-form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="report-form__label">
                    "Species"
                    <input
                        class="report-form__input"
                        type="text"
                        prop:value=move || species.get()
                        on:input=move |ev| species.set(event_target_value(&ev))
                    />
                </label>
                <label class="report-form__label">
                    "Breed (optional)"
                    <input
                        class="report-form__input"
                        type="text"
                        prop:value=move || breed.get()
                        on:input=move |ev| breed.set(event_target_value(&ev))
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
                {move || {
                    remote
                        .error
                        .get()
                        .map(|err| view! { <p class="report-form__error">{err.to_string()}</p> })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || remote.loading.get()>
                    {move || if remote.loading.get() { "Saving..." } else { "Add pet" }}
                </button>
            </form>
        </div>
    }
}
