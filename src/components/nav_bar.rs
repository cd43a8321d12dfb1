//! Top navigation bar with auth-aware links.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Site-wide navigation. Shows account actions when signed in and the
/// sign-in/sign-up pair otherwise.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let signed_in = move || session.get().is_authenticated();
    let username = move || {
        session
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"PawFinder"</a>
            <div class="nav-bar__links">
                <a href="/search">"Search"</a>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <a href="/signin">"Sign in"</a>
                            <a href="/signup">"Sign up"</a>
                        }
                    }
                >
                    <a href="/pets/new">"Add pet"</a>
                    <a href="/lost/new">"Report lost"</a>
                    <a href="/found/new">"Report found"</a>
                    <a class="nav-bar__user" href="/profile">{username}</a>
                    <a href="/logout">"Sign out"</a>
                </Show>
            </div>
        </nav>
    }
}
