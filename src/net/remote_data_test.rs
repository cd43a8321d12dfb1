use super::*;
use crate::state::session::UserData;

fn signed_in(token: &str) -> SessionState {
    let mut session = SessionState::default();
    session.sign_in(UserData {
        access_token: token.to_owned(),
        username: "ada".to_owned(),
    });
    session
}

fn header<'a>(headers: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v.as_str())
}

// =============================================================
// RequestConfig
// =============================================================

#[test]
fn config_defaults_to_get_without_auth_or_body() {
    let config = RequestConfig::new("/api/pets/1");
    assert_eq!(config.method, Method::Get);
    assert!(!config.auth_required);
    assert!(config.body.is_none());
}

#[test]
fn config_builders_set_method_auth_and_body() {
    let config = RequestConfig::new("/api/pets")
        .method(Method::Post)
        .authenticated()
        .body(serde_json::json!({"name": "Rex"}));
    assert_eq!(config.method, Method::Post);
    assert!(config.auth_required);
    assert_eq!(config.body, Some(serde_json::json!({"name": "Rex"})));
}

// =============================================================
// Header construction
// =============================================================

#[test]
fn content_type_is_always_json() {
    let headers = build_headers(false, None);
    assert_eq!(header(&headers, "Content-Type"), Some("application/json"));

    let session = signed_in("t-1");
    let headers = build_headers(true, Some(&session));
    assert_eq!(header(&headers, "Content-Type"), Some("application/json"));
}

#[test]
fn bearer_header_uses_session_token() {
    let session = signed_in("t-42");
    let headers = build_headers(true, Some(&session));
    assert_eq!(header(&headers, "Authorization"), Some("Bearer t-42"));
}

#[test]
fn no_bearer_header_when_auth_not_requested() {
    let session = signed_in("t-42");
    let headers = build_headers(false, Some(&session));
    assert_eq!(header(&headers, "Authorization"), None);
}

#[test]
fn no_bearer_header_without_store() {
    let headers = build_headers(true, None);
    assert_eq!(header(&headers, "Authorization"), None);
}

#[test]
fn no_bearer_header_when_signed_out() {
    let headers = build_headers(true, Some(&SessionState::default()));
    assert_eq!(header(&headers, "Authorization"), None);
}

// =============================================================
// Error taxonomy
// =============================================================

#[test]
fn status_error_message_carries_the_code() {
    let err = RequestError::Status(404);
    assert!(err.to_string().contains("404"));
}

#[test]
fn transport_and_decode_messages_pass_through() {
    assert_eq!(
        RequestError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
    assert_eq!(
        RequestError::Decode("expected value".to_owned()).to_string(),
        "invalid response body: expected value"
    );
}

// =============================================================
// Cell protocol
// =============================================================

#[test]
fn begin_raises_loading_and_clears_error() {
    let remote = RemoteData::new(None);
    remote.error.set(Some(RequestError::Status(500)));

    let ticket = remote.begin();
    assert!(remote.loading.get_untracked());
    assert!(remote.error.get_untracked().is_none());
    assert!(remote.is_current(ticket));
}

#[test]
fn success_stores_data_and_keeps_error_clear() {
    let remote = RemoteData::new(None);
    let ticket = remote.begin();
    {
        let _reset = LoadingReset { remote, ticket };
        remote.record(ticket, &Ok(serde_json::json!({"id": 1})));
    }
    assert_eq!(remote.data.get_untracked(), Some(serde_json::json!({"id": 1})));
    assert!(remote.error.get_untracked().is_none());
    assert!(!remote.loading.get_untracked());
}

#[test]
fn failure_stores_error_and_keeps_previous_data() {
    let remote = RemoteData::new(None);
    remote.data.set(Some(serde_json::json!({"id": 7})));

    let ticket = remote.begin();
    {
        let _reset = LoadingReset { remote, ticket };
        remote.record(ticket, &Err(RequestError::Status(404)));
    }
    assert_eq!(remote.error.get_untracked(), Some(RequestError::Status(404)));
    assert_eq!(remote.data.get_untracked(), Some(serde_json::json!({"id": 7})));
    assert!(!remote.loading.get_untracked());
}

#[test]
fn loading_resets_even_without_a_recorded_result() {
    let remote = RemoteData::new(None);
    let ticket = remote.begin();
    drop(LoadingReset { remote, ticket });
    assert!(!remote.loading.get_untracked());
}

#[test]
fn superseded_call_does_not_touch_the_cells() {
    let remote = RemoteData::new(None);
    let first = remote.begin();
    let second = remote.begin();

    // The stale completion neither writes data nor lowers loading.
    remote.record(first, &Ok(serde_json::json!("stale")));
    drop(LoadingReset { remote, ticket: first });
    assert!(remote.data.get_untracked().is_none());
    assert!(remote.loading.get_untracked());

    remote.record(second, &Ok(serde_json::json!("fresh")));
    drop(LoadingReset { remote, ticket: second });
    assert_eq!(remote.data.get_untracked(), Some(serde_json::json!("fresh")));
    assert!(!remote.loading.get_untracked());
}

// =============================================================
// send() on the native target
// =============================================================

#[test]
fn native_send_completes_with_a_transport_error() {
    let remote = RemoteData::new(None);
    remote.data.set(Some(serde_json::json!({"id": 3})));

    let config = RequestConfig::new("/api/pets/3");
    let result = futures::executor::block_on(remote.send(&config));

    assert!(matches!(result, Err(RequestError::Transport(_))));
    assert!(matches!(
        remote.error.get_untracked(),
        Some(RequestError::Transport(_))
    ));
    assert_eq!(remote.data.get_untracked(), Some(serde_json::json!({"id": 3})));
    assert!(!remote.loading.get_untracked());
}
