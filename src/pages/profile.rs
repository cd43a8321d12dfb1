//! Profile page: the signed-in user's account details and registered pets.

use leptos::prelude::*;

use crate::components::pet_card::PetCard;
use crate::net::api;
use crate::net::remote_data::{RemoteData, RequestConfig};
use crate::net::types::UserProfile;
use crate::state::session::SessionState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let remote = RemoteData::new(Some(session_signal));

    let profile = LocalResource::new(move || async move {
        let config = RequestConfig::new(api::profile_url()).authenticated();
        let value = remote.send(&config).await.ok()?;
        api::decode::<UserProfile>(value).ok()
    });

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile.get().flatten().map(|profile| {
                        view! {
                            <section class="profile-page__details">
                                <p class="profile-page__username">{profile.username}</p>
                                {profile
                                    .email
                                    .map(|email| view! { <p class="profile-page__email">{email}</p> })}
                                <h2>"My pets"</h2>
                                {if profile.pets.is_empty() {
                                    view! {
                                        <p class="profile-page__empty">
                                            "No pets registered yet. " <a href="/pets/new">"Add one"</a>
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="profile-page__pets">
                                            {profile
                                                .pets
                                                .into_iter()
                                                .map(|pet| view! { <PetCard pet=pet/> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }}
                            </section>
                        }
                    })
                }}
            </Suspense>
            {move || {
                remote
                    .error
                    .get()
                    .map(|err| view! { <p class="profile-page__error">{err.to_string()}</p> })
            }}
        </div>
    }
}
