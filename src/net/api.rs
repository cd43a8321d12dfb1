//! Endpoint URL builders and typed decoding of fetched JSON.
//!
//! The backend contract stays opaque here: these helpers only know the paths
//! the pages talk to, all rooted under [`API_BASE`]. Dynamic ids arrive as
//! route-param strings and pass through unparsed.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use crate::net::remote_data::RequestError;

/// Base path all backend endpoints live under.
pub const API_BASE: &str = "/api";

fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

pub fn signin_url() -> String {
    api_url("/auth/signin")
}

pub fn signup_url() -> String {
    api_url("/auth/signup")
}

pub fn logout_url() -> String {
    api_url("/auth/logout")
}

pub fn profile_url() -> String {
    api_url("/users/me")
}

pub fn pets_url() -> String {
    api_url("/pets")
}

pub fn pet_url(id: &str) -> String {
    api_url(&format!("/pets/{id}"))
}

pub fn pet_search_url(query: &str) -> String {
    api_url(&format!("/pets/search?q={query}"))
}

pub fn lost_reports_url() -> String {
    api_url("/lost-reports")
}

pub fn lost_report_url(id: &str) -> String {
    api_url(&format!("/lost-reports/{id}"))
}

pub fn found_reports_url() -> String {
    api_url("/found-reports")
}

pub fn found_report_url(id: &str) -> String {
    api_url(&format!("/found-reports/{id}"))
}

pub fn sightings_url(lost_report_id: &str) -> String {
    api_url(&format!("/lost-reports/{lost_report_id}/sightings"))
}

/// Convert a fetched JSON value into a typed DTO.
///
/// # Errors
///
/// Returns [`RequestError::Decode`] when the value does not match `T`.
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, RequestError> {
    serde_json::from_value(value).map_err(|e| RequestError::Decode(e.to_string()))
}
