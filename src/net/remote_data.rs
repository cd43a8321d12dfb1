//! Remote data hook: a reusable unit of request state plus a trigger.
//!
//! Each `RemoteData` instance owns three reactive cells (`data`, `error`,
//! `loading`) and a `send` operation that performs one HTTP request described
//! by a [`RequestConfig`]. The session store is an explicit optional
//! dependency resolved at construction; it is read only at trigger time, to
//! attach a bearer token when the request asks for one.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side: `send`
//! completes through the same state protocol with a transport error, so the
//! cell behavior stays testable on the native target.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "remote_data_test.rs"]
mod remote_data_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

/// HTTP method for a request descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

/// One request descriptor, built by the caller per invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestConfig {
    pub url: String,
    pub method: Method,
    pub auth_required: bool,
    pub body: Option<serde_json::Value>,
}

impl RequestConfig {
    /// A GET request with no auth and no body; adjust with the builders below.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            auth_required: false,
            body: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Ask for an `Authorization: Bearer` header from the session store.
    pub fn authenticated(mut self) -> Self {
        self.auth_required = true;
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Why a request invocation failed. Every variant is terminal for that
/// invocation; the caller decides how to present it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// Fetch-level failure (connection, DNS, aborted load).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Reactive request state owned by one consuming component.
///
/// `data` keeps the last successful result, `error` the last failure, and
/// `loading` is true strictly while a call is in flight. Signals are `Copy`,
/// so the handle can move into closures and async blocks freely.
#[derive(Clone, Copy)]
pub struct RemoteData {
    pub data: RwSignal<Option<serde_json::Value>>,
    pub error: RwSignal<Option<RequestError>>,
    pub loading: RwSignal<bool>,
    session: Option<RwSignal<SessionState>>,
    seq: RwSignal<u64>,
}

impl RemoteData {
    /// Pass `None` when the consuming view never sends authenticated
    /// requests; auth-flagged requests then go out without a bearer header.
    pub fn new(session: Option<RwSignal<SessionState>>) -> Self {
        Self {
            data: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            session,
            seq: RwSignal::new(0),
        }
    }

    /// Perform the request described by `config`.
    ///
    /// On success the parsed JSON body is stored in `data` and returned. On
    /// failure the error is stored in `error` and returned as `Err`. `data`
    /// keeps its previous value across failed calls. `loading` is reset on
    /// every exit path by a scoped guard.
    ///
    /// Overlapping calls on the same instance resolve as cancel-and-replace:
    /// only the newest call writes the cells; a superseded call still returns
    /// its own result to its caller. The underlying fetch is not aborted.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] for transport failures, non-2xx statuses, and
    /// bodies that are not valid JSON.
    pub async fn send(&self, config: &RequestConfig) -> Result<serde_json::Value, RequestError> {
        let ticket = self.begin();
        let _reset = LoadingReset { remote: *self, ticket };

        let snapshot = self.session.map(|s| s.get_untracked());
        let headers = build_headers(config.auth_required, snapshot.as_ref());

        let result = perform(config, &headers).await;
        if let Err(err) = &result {
            leptos::logging::warn!("{} {} failed: {err}", config.method.as_str(), config.url);
        }
        self.record(ticket, &result);
        result
    }

    /// Start an invocation: take the next sequence ticket, raise `loading`,
    /// clear any previous error. `data` is left untouched.
    fn begin(&self) -> u64 {
        let ticket = self.seq.get_untracked() + 1;
        self.seq.set(ticket);
        self.loading.set(true);
        self.error.set(None);
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.seq.get_untracked() == ticket
    }

    /// Apply a completed invocation to the cells, unless a newer call has
    /// taken over in the meantime.
    fn record(&self, ticket: u64, result: &Result<serde_json::Value, RequestError>) {
        if !self.is_current(ticket) {
            return;
        }
        match result {
            Ok(value) => self.data.set(Some(value.clone())),
            Err(err) => self.error.set(Some(err.clone())),
        }
    }
}

/// Scoped `loading` reset: drops on every exit path of `send`, and only
/// touches the cell while its ticket is still the current invocation.
struct LoadingReset {
    remote: RemoteData,
    ticket: u64,
}

impl Drop for LoadingReset {
    fn drop(&mut self) {
        if self.remote.is_current(self.ticket) {
            self.remote.loading.set(false);
        }
    }
}

/// Header set for one invocation: always JSON, bearer token only when the
/// request asks for auth and the session snapshot holds one.
fn build_headers(auth_required: bool, session: Option<&SessionState>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_owned())];
    if auth_required {
        if let Some(token) = session.and_then(SessionState::access_token) {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
    }
    headers
}

#[cfg(feature = "hydrate")]
async fn perform(
    config: &RequestConfig,
    headers: &[(&'static str, String)],
) -> Result<serde_json::Value, RequestError> {
    let mut builder = gloo_net::http::RequestBuilder::new(&config.url).method(gloo_method(config.method));
    for (name, value) in headers {
        builder = builder.header(name, value);
    }

    let request = match &config.body {
        Some(body) => {
            let text = serde_json::to_string(body).map_err(|e| RequestError::Transport(e.to_string()))?;
            builder.body(text).map_err(|e| RequestError::Transport(e.to_string()))?
        }
        None => builder.build().map_err(|e| RequestError::Transport(e.to_string()))?,
    };

    let response = request.send().await.map_err(|e| RequestError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(RequestError::Status(response.status()));
    }
    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
async fn perform(
    config: &RequestConfig,
    headers: &[(&'static str, String)],
) -> Result<serde_json::Value, RequestError> {
    let _ = (config, headers);
    Err(RequestError::Transport("not available on the server".to_owned()))
}

#[cfg(feature = "hydrate")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
        Method::Patch => gloo_net::http::Method::PATCH,
    }
}
