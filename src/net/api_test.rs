use super::*;
use crate::net::types::Pet;

// =============================================================
// URL builders
// =============================================================

#[test]
fn urls_are_rooted_under_the_api_base() {
    assert_eq!(signin_url(), "/api/auth/signin");
    assert_eq!(signup_url(), "/api/auth/signup");
    assert_eq!(logout_url(), "/api/auth/logout");
    assert_eq!(profile_url(), "/api/users/me");
    assert_eq!(pets_url(), "/api/pets");
    assert_eq!(lost_reports_url(), "/api/lost-reports");
    assert_eq!(found_reports_url(), "/api/found-reports");
}

#[test]
fn item_urls_interpolate_route_params() {
    assert_eq!(pet_url("42"), "/api/pets/42");
    assert_eq!(lost_report_url("9"), "/api/lost-reports/9");
    assert_eq!(found_report_url("9"), "/api/found-reports/9");
    assert_eq!(sightings_url("9"), "/api/lost-reports/9/sightings");
}

#[test]
fn search_url_appends_the_query() {
    assert_eq!(pet_search_url("beagle"), "/api/pets/search?q=beagle");
}

// =============================================================
// decode
// =============================================================

#[test]
fn decode_maps_matching_values_to_the_dto() {
    let value = serde_json::json!({
        "id": 1,
        "name": "Rex",
        "species": "dog",
        "breed": "beagle",
        "description": null,
        "photoUrl": null,
        "ownerUsername": "ada"
    });
    let pet: Pet = decode(value).expect("decode");
    assert_eq!(pet.id, 1);
    assert_eq!(pet.name, "Rex");
    assert_eq!(pet.owner_username.as_deref(), Some("ada"));
}

#[test]
fn decode_reports_shape_mismatches_as_decode_errors() {
    let value = serde_json::json!({"id": "not-a-number"});
    let result: Result<Pet, RequestError> = decode(value);
    assert!(matches!(result, Err(RequestError::Decode(_))));
}
