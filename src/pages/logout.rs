//! Logout page: best-effort server sign-out, then clears the local session.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::net::remote_data::{Method, RequestConfig};
use crate::net::remote_data::RemoteData;
#[cfg(feature = "hydrate")]
use crate::state::session;
use crate::state::session::SessionState;

/// Signs the user out on mount. The local session clears even if the server
/// call fails.
#[component]
pub fn LogoutPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let remote = RemoteData::new(Some(session_signal));
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let config = RequestConfig::new(api::logout_url())
                    .method(Method::Post)
                    .authenticated();
                let _ = remote.send(&config).await;
                session_signal.update(SessionState::sign_out);
                session::persist(&session_signal.get_untracked());
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (remote, session_signal);
        }
    });

    view! {
        <div class="logout-page">
            <p>"Signing out..."</p>
        </div>
    }
}
