//! Route views, one component per entry in the route table.

pub mod add_pet;
pub mod create_found_report;
pub mod create_lost_report;
pub mod create_sighting;
pub mod found_report;
pub mod home;
pub mod logout;
pub mod lost_report;
pub mod pet_details;
pub mod profile;
pub mod search;
pub mod signin;
pub mod signup;

/// Optional form fields submit as JSON `null` rather than empty strings.
#[cfg(feature = "hydrate")]
fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
