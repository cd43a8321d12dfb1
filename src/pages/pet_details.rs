//! Pet detail page for `/pets/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::remote_data::{RemoteData, RequestConfig};
use crate::net::types::Pet;
use crate::state::session::SessionState;

#[component]
pub fn PetDetailsPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let remote = RemoteData::new(Some(session_signal));
    let params = use_params_map();

    let pet = LocalResource::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        async move {
            let config = RequestConfig::new(api::pet_url(&id)).authenticated();
            let value = remote.send(&config).await.ok()?;
            api::decode::<Pet>(value).ok()
        }
    });

    view! {
        <div class="pet-details-page">
            <Suspense fallback=move || view! { <p>"Loading pet..."</p> }>
                {move || {
                    pet.get().map(|found| match found {
                        Some(pet) => {
                            let subtitle = match &pet.breed {
                                Some(breed) => format!("{}, {}", pet.species, breed),
                                None => pet.species.clone(),
                            };
                            view! {
                                <article class="pet-details">
                                    <h1 class="pet-details__name">{pet.name}</h1>
                                    <p class="pet-details__species">{subtitle}</p>
                                    {pet
                                        .photo_url
                                        .map(|url| view! { <img class="pet-details__photo" src=url alt="Pet photo"/> })}
                                    {pet
                                        .description
                                        .map(|text| view! { <p class="pet-details__description">{text}</p> })}
                                    {pet
                                        .owner_username
                                        .map(|owner| view! { <p class="pet-details__owner">"Owner: " {owner}</p> })}
                                </article>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <p class="pet-details-page__error">
                                    {move || {
                                        remote
                                            .error
                                            .get()
                                            .map_or_else(|| "Pet not found.".to_owned(), |err| err.to_string())
                                    }}
                                </p>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
