use super::*;
use crate::state::session::UserData;

fn signed_in() -> SessionState {
    let mut session = SessionState::default();
    session.sign_in(UserData {
        access_token: "t-1".to_owned(),
        username: "ada".to_owned(),
    });
    session
}

// =============================================================
// Path matching
// =============================================================

#[test]
fn literal_paths_match_their_entries() {
    assert_eq!(find_route("/").map(|r| r.name), Some("home"));
    assert_eq!(find_route("/signin").map(|r| r.name), Some("signin"));
    assert_eq!(find_route("/profile").map(|r| r.name), Some("profile"));
}

#[test]
fn dynamic_segments_match_any_value() {
    assert_eq!(find_route("/pets/42").map(|r| r.name), Some("pet-details"));
    assert_eq!(find_route("/lost/9").map(|r| r.name), Some("lost-report"));
    assert_eq!(
        find_route("/lost-reports/9/sighting/new").map(|r| r.name),
        Some("create-sighting")
    );
}

#[test]
fn fixed_paths_shadow_their_parameterized_siblings() {
    assert_eq!(find_route("/lost/new").map(|r| r.name), Some("create-lost-report"));
    assert_eq!(find_route("/found/new").map(|r| r.name), Some("create-found-report"));
    assert_eq!(find_route("/pets/new").map(|r| r.name), Some("add-pet"));
}

#[test]
fn trailing_slashes_are_ignored() {
    assert_eq!(find_route("/search/").map(|r| r.name), Some("search"));
    assert_eq!(find_route("/pets/42/").map(|r| r.name), Some("pet-details"));
}

#[test]
fn unknown_paths_do_not_match() {
    assert!(find_route("/admin").is_none());
    assert!(find_route("/pets").is_none());
    assert!(find_route("/pets/42/photos").is_none());
}

// =============================================================
// Guard predicate
// =============================================================

#[test]
fn protected_route_redirects_when_signed_out() {
    let route = find_route("/profile").expect("route");
    assert_eq!(
        decide(route, &SessionState::default()),
        NavigationDecision::Redirect(SIGNIN_PATH)
    );
}

#[test]
fn protected_route_proceeds_when_signed_in() {
    let route = find_route("/profile").expect("route");
    assert_eq!(decide(route, &signed_in()), NavigationDecision::Proceed);
}

#[test]
fn public_route_proceeds_regardless_of_session() {
    let route = find_route("/search").expect("route");
    assert_eq!(decide(route, &SessionState::default()), NavigationDecision::Proceed);
    assert_eq!(decide(route, &signed_in()), NavigationDecision::Proceed);
}

#[test]
fn unknown_path_proceeds_to_the_fallback() {
    assert_eq!(
        check_path("/nowhere", &SessionState::default()),
        NavigationDecision::Proceed
    );
}

#[test]
fn check_path_redirects_protected_paths_when_signed_out() {
    for path in ["/logout", "/profile", "/pets/new", "/pets/3", "/lost/new", "/found/new"] {
        assert_eq!(
            check_path(path, &SessionState::default()),
            NavigationDecision::Redirect(SIGNIN_PATH),
            "expected redirect for {path}"
        );
    }
}

// =============================================================
// Table invariants
// =============================================================

#[test]
fn redirect_target_is_routable() {
    let entry = find_route(SIGNIN_PATH).expect("sign-in route declared");
    assert!(!entry.requires_auth);
}

#[test]
fn auth_flags_cover_exactly_the_protected_views() {
    let protected: Vec<&str> = ROUTES.iter().filter(|r| r.requires_auth).map(|r| r.name).collect();
    assert_eq!(
        protected,
        ["logout", "profile", "add-pet", "pet-details", "create-lost-report", "create-found-report"]
    );
}

#[test]
fn route_names_are_unique() {
    let mut names: Vec<&str> = ROUTES.iter().map(|r| r.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ROUTES.len());
}
