//! Wire DTOs for the backend API.
//!
//! The backend serializes camelCase keys; fields it may omit are `Option`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registered pet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub owner_username: Option<String>,
}

/// A lost-pet report filed by an owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostReport {
    pub id: i64,
    pub pet_id: Option<i64>,
    pub pet_name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date_lost: Option<String>,
    #[serde(default)]
    pub resolved: bool,
}

/// A found-pet report filed by a finder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundReport {
    pub id: i64,
    pub species: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date_found: Option<String>,
    #[serde(default)]
    pub resolved: bool,
}

/// A sighting attached to a lost-pet report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SightingReport {
    pub id: i64,
    pub lost_report_id: i64,
    pub location: String,
    pub description: Option<String>,
    pub sighted_at: Option<String>,
}

/// The signed-in user's profile, as served by `/api/users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub email: Option<String>,
    #[serde(default)]
    pub pets: Vec<Pet>,
}
