//! Reusable card for pet list items in search results and the profile.

use leptos::prelude::*;

use crate::net::types::Pet;

/// A clickable card linking to the pet's detail page.
#[component]
pub fn PetCard(pet: Pet) -> impl IntoView {
    let href = format!("/pets/{}", pet.id);
    let subtitle = match &pet.breed {
        Some(breed) => format!("{}, {}", pet.species, breed),
        None => pet.species.clone(),
    };

    view! {
        <li class="pet-card">
            <a class="pet-card__link" href=href>
                <span class="pet-card__name">{pet.name}</span>
                <span class="pet-card__species">{subtitle}</span>
            </a>
        </li>
    }
}
