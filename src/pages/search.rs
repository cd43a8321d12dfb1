//! Search page: query form over the public pet index.

use leptos::prelude::*;

use crate::components::pet_card::PetCard;
use crate::net::api;
use crate::net::remote_data::{RemoteData, RequestConfig};
use crate::net::types::Pet;

/// Pet search. Each submitted query re-runs the fetch; results link to the
/// (guarded) pet detail pages.
#[component]
pub fn SearchPage() -> impl IntoView {
    let remote = RemoteData::new(None);
    let query = RwSignal::new(String::new());
    let submitted = RwSignal::new(None::<String>);

    let results = LocalResource::new(move || {
        let term = submitted.get();
        async move {
            let term = term?;
            let value = remote.send(&RequestConfig::new(api::pet_search_url(&term))).await.ok()?;
            api::decode::<Vec<Pet>>(value).ok()
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = query.get_untracked().trim().to_owned();
        if !term.is_empty() {
            submitted.set(Some(term));
        }
    };

    view! {
        <div class="search-page">
            <h1>"Search pets"</h1>
            <form class="search-page__form" on:submit=submit>
                <input
                    class="search-page__input"
                    type="search"
                    placeholder="Name, species, or breed"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || remote.loading.get()>
                    "Search"
                </button>
            </form>
            {move || {
                remote
                    .error
                    .get()
                    .map(|err| view! { <p class="search-page__error">{err.to_string()}</p> })
            }}
            <Suspense fallback=move || view! { <p>"Searching..."</p> }>
                {move || {
                    results.get().flatten().map(|pets| {
                        if pets.is_empty() {
                            view! { <p class="search-page__empty">"No pets matched."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="search-page__results">
                                    {pets
                                        .into_iter()
                                        .map(|pet| view! { <PetCard pet=pet/> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
