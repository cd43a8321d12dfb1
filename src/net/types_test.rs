use super::*;

#[test]
fn pet_decodes_from_camel_case_json() {
    let pet: Pet = serde_json::from_value(serde_json::json!({
        "id": 7,
        "name": "Luna",
        "species": "cat",
        "breed": null,
        "description": "grey tabby",
        "photoUrl": "/img/luna.jpg",
        "ownerUsername": "ada"
    }))
    .expect("deserialize");
    assert_eq!(pet.id, 7);
    assert_eq!(pet.description.as_deref(), Some("grey tabby"));
    assert_eq!(pet.photo_url.as_deref(), Some("/img/luna.jpg"));
}

#[test]
fn lost_report_tolerates_missing_optional_fields() {
    let report: LostReport = serde_json::from_value(serde_json::json!({
        "id": 3,
        "petId": null,
        "petName": "Rex",
        "description": null,
        "location": null,
        "dateLost": null
    }))
    .expect("deserialize");
    assert_eq!(report.pet_name, "Rex");
    assert!(!report.resolved);
}

#[test]
fn found_report_decodes_with_all_fields() {
    let report: FoundReport = serde_json::from_value(serde_json::json!({
        "id": 4,
        "species": "dog",
        "description": "brown, no collar",
        "location": "Central Park",
        "dateFound": "2024-05-01",
        "resolved": true
    }))
    .expect("deserialize");
    assert_eq!(report.location.as_deref(), Some("Central Park"));
    assert!(report.resolved);
}

#[test]
fn sighting_links_back_to_its_lost_report() {
    let sighting: SightingReport = serde_json::from_value(serde_json::json!({
        "id": 11,
        "lostReportId": 3,
        "location": "5th Ave",
        "description": null,
        "sightedAt": "2024-05-02T10:00:00Z"
    }))
    .expect("deserialize");
    assert_eq!(sighting.lost_report_id, 3);
    assert_eq!(sighting.location, "5th Ave");
}

#[test]
fn user_profile_defaults_to_an_empty_pet_list() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "username": "ada",
        "email": null
    }))
    .expect("deserialize");
    assert!(profile.pets.is_empty());
}
