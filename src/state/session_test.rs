use super::*;

fn ada() -> UserData {
    UserData {
        access_token: "t-ada".to_owned(),
        username: "ada".to_owned(),
    }
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn default_session_is_signed_out() {
    let session = SessionState::default();
    assert!(!session.is_authenticated());
    assert!(session.access_token().is_none());
}

#[test]
fn sign_in_exposes_flag_and_token() {
    let mut session = SessionState::default();
    session.sign_in(ada());
    assert!(session.is_authenticated());
    assert_eq!(session.access_token(), Some("t-ada"));
}

#[test]
fn sign_out_clears_flag_and_token() {
    let mut session = SessionState::default();
    session.sign_in(ada());
    session.sign_out();
    assert!(!session.is_authenticated());
    assert!(session.access_token().is_none());
}

// =============================================================
// Persistence format
// =============================================================

#[test]
fn session_round_trips_through_json() {
    let mut session = SessionState::default();
    session.sign_in(ada());

    let json = serde_json::to_string(&session).expect("serialize");
    let back: SessionState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, session);
}

#[test]
fn user_data_uses_camel_case_keys() {
    let user: UserData =
        serde_json::from_str(r#"{"accessToken":"t-1","username":"ada"}"#).expect("deserialize");
    assert_eq!(user.access_token, "t-1");
    assert_eq!(user.username, "ada");
}

#[test]
fn corrupt_stored_json_falls_back_to_default() {
    let parsed: SessionState = serde_json::from_str("{not json").unwrap_or_default();
    assert_eq!(parsed, SessionState::default());
}

#[test]
fn restore_off_the_browser_is_signed_out() {
    assert_eq!(restore(), SessionState::default());
}
