//! Session store: authentication flag, signed-in user data, persistence.
//!
//! Provided at the app root as `RwSignal<SessionState>` context. The remote
//! data hook and the route guard both consume it read-only; the sign-in,
//! sign-up, and logout pages mutate it. Persistence to `localStorage` only
//! exists in the browser; the native target restores the signed-out default.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "pawfinder_session";

/// Signed-in user details, as returned by the auth endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub access_token: String,
    pub username: String,
}

/// Process-wide authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<UserData>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Bearer token for outgoing authenticated requests, if signed in.
    pub fn access_token(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.access_token.as_str())
    }

    pub fn sign_in(&mut self, user: UserData) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

/// Read the persisted session from `localStorage`.
///
/// Missing or corrupt entries restore the signed-out default rather than
/// failing app startup.
pub fn restore() -> SessionState {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        match stored {
            Some(json) => serde_json::from_str(&json).unwrap_or_default(),
            None => SessionState::default(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionState::default()
    }
}

/// Write the session to `localStorage`; a signed-out session clears the key.
pub fn persist(state: &SessionState) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if state.is_authenticated() {
            if let Ok(json) = serde_json::to_string(state) {
                let _ = storage.set_item(STORAGE_KEY, &json);
            }
        } else {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}
