//! Declarative route table and the authentication guard.
//!
//! The table mirrors the `Routes` tree in `app.rs`; the guard is a pure
//! function from (matched route, session snapshot) to a navigation decision,
//! wired into the router by the [`RouteGuard`] component. Keeping the
//! decision pure makes it unit-testable without a navigation engine.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;

/// Where unauthenticated visitors land when they hit a protected route.
pub const SIGNIN_PATH: &str = "/signin";

/// One entry of the declarative route table.
///
/// `path` uses `:name` placeholders for dynamic segments. Entries are checked
/// in declaration order, so fixed paths (`/lost/new`) are listed before their
/// parameterized siblings (`/lost/:id`).
#[derive(Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: "/", name: "home", requires_auth: false },
    RouteEntry { path: "/signin", name: "signin", requires_auth: false },
    RouteEntry { path: "/signup", name: "signup", requires_auth: false },
    RouteEntry { path: "/logout", name: "logout", requires_auth: true },
    RouteEntry { path: "/profile", name: "profile", requires_auth: true },
    RouteEntry { path: "/search", name: "search", requires_auth: false },
    RouteEntry { path: "/pets/new", name: "add-pet", requires_auth: true },
    RouteEntry { path: "/pets/:id", name: "pet-details", requires_auth: true },
    RouteEntry { path: "/lost/new", name: "create-lost-report", requires_auth: true },
    RouteEntry { path: "/lost/:id", name: "lost-report", requires_auth: false },
    RouteEntry { path: "/found/new", name: "create-found-report", requires_auth: true },
    RouteEntry { path: "/found/:id", name: "found-report", requires_auth: false },
    RouteEntry {
        path: "/lost-reports/:id/sighting/new",
        name: "create-sighting",
        requires_auth: false,
    },
];

/// Outcome of evaluating the guard for one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(&'static str),
}

/// Match a concrete path against the table. First match in declaration
/// order wins; trailing slashes are ignored.
pub fn find_route(path: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|route| pattern_matches(route.path, path))
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = segments(pattern).collect();
    let path_segments: Vec<&str> = segments(path).collect();
    if pattern_segments.len() != path_segments.len() {
        return false;
    }
    pattern_segments
        .iter()
        .zip(&path_segments)
        .all(|(pattern_segment, path_segment)| {
            pattern_segment.starts_with(':') || pattern_segment == path_segment
        })
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// The guard predicate: redirect iff the route is protected and the session
/// snapshot is unauthenticated. Synchronous and infallible.
pub fn decide(route: &RouteEntry, session: &SessionState) -> NavigationDecision {
    if route.requires_auth && !session.is_authenticated() {
        NavigationDecision::Redirect(SIGNIN_PATH)
    } else {
        NavigationDecision::Proceed
    }
}

/// Guard a concrete path. Paths outside the table proceed; the router's
/// fallback renders not-found for them.
pub fn check_path(path: &str, session: &SessionState) -> NavigationDecision {
    find_route(path).map_or(NavigationDecision::Proceed, |route| decide(route, session))
}

/// Runs the guard on every navigation. Mount once, inside the `Router`.
///
/// Redirects use `replace`, so the protected URL never enters history.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        if let NavigationDecision::Redirect(target) = check_path(&path, &session.get()) {
            leptos::logging::warn!("unauthenticated access to {path}, redirecting to {target}");
            navigate(
                target,
                NavigateOptions { replace: true, ..NavigateOptions::default() },
            );
        }
    });
}
