//! Sample data for a fresh backend.
//!
//! Each collection is seeded only while it is empty, so running the seed
//! twice never duplicates records.

use serde::Serialize;
use tracing::info;

use crate::application::record_kind::{Alerts, Helplines, RecordKind, SafeLocations, Volunteers};
use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::{
    AlertDraft, Availability, HelplineDraft, SafeLocationDraft, Severity, VolunteerDraft,
};
use crate::domain::ports::CollectionApi;

/// What seeding did to one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SeedOutcome {
    Inserted { count: usize },
    Skipped { existing: usize },
}

/// Post `samples` to the kind's endpoint if, and only if, it is empty.
pub async fn seed_kind<K: RecordKind>(
    api: &dyn CollectionApi,
    samples: &[K::Draft],
) -> SyncResult<SeedOutcome> {
    let existing = api
        .list(K::ENDPOINT)
        .await
        .map_err(|source| SyncError::LoadFailed {
            kind: K::NAME,
            source,
        })?
        .len();
    if existing > 0 {
        info!(kind = K::NAME, existing, "collection already has data, skipping");
        return Ok(SeedOutcome::Skipped { existing });
    }

    for draft in samples {
        let body = serde_json::to_value(draft).map_err(|source| SyncError::Encode {
            kind: K::NAME,
            source,
        })?;
        api.create(K::ENDPOINT, &body)
            .await
            .map_err(|source| SyncError::SubmitFailed {
                kind: K::NAME,
                source,
            })?;
    }
    info!(kind = K::NAME, count = samples.len(), "collection seeded");
    Ok(SeedOutcome::Inserted {
        count: samples.len(),
    })
}

/// Seed every collection concurrently, reported in page order. A failure in
/// one kind does not stop the others.
pub async fn seed_all(api: &dyn CollectionApi) -> Vec<(&'static str, SyncResult<SeedOutcome>)> {
    let (alerts, helplines, safe_locations, volunteers) = (
        sample_alerts(),
        sample_helplines(),
        sample_safe_locations(),
        sample_volunteers(),
    );
    let (alerts, helplines, safe_locations, volunteers) = futures::join!(
        seed_kind::<Alerts>(api, &alerts),
        seed_kind::<Helplines>(api, &helplines),
        seed_kind::<SafeLocations>(api, &safe_locations),
        seed_kind::<Volunteers>(api, &volunteers),
    );
    vec![
        (Alerts::NAME, alerts),
        (Helplines::NAME, helplines),
        (SafeLocations::NAME, safe_locations),
        (Volunteers::NAME, volunteers),
    ]
}

pub fn sample_alerts() -> Vec<AlertDraft> {
    vec![
        AlertDraft {
            title: "Heavy Rainfall Warning".to_string(),
            message: "Heavy rainfall expected in the next 24 hours. Please stay indoors and avoid low-lying areas.".to_string(),
            severity: Severity::High.to_string(),
            location: "Downtown Area".to_string(),
        },
        AlertDraft {
            title: "Emergency Shelter Open".to_string(),
            message: "Community Center at 123 Main St is now open as an emergency shelter.".to_string(),
            severity: Severity::Medium.to_string(),
            location: "123 Main Street".to_string(),
        },
    ]
}

pub fn sample_helplines() -> Vec<HelplineDraft> {
    [
        ("Emergency Services", "911", "general", "General emergency services"),
        ("Disaster Relief Hotline", "1-800-DISASTER", "rescue", "24/7 disaster relief assistance"),
        ("Medical Emergency", "1-800-MEDICAL", "medical", "Medical emergency hotline"),
        ("Fire Department", "1-800-FIRE", "fire", "Fire emergency services"),
    ]
    .into_iter()
    .map(|(name, number, category, description)| HelplineDraft {
        name: name.to_string(),
        number: number.to_string(),
        category: category.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn sample_safe_locations() -> Vec<SafeLocationDraft> {
    let location = |name: &str,
                    address: &str,
                    coordinates: (f64, f64),
                    capacity: i64,
                    current_occupancy: i64,
                    facilities: &[&str],
                    contact: &str| SafeLocationDraft {
        name: name.to_string(),
        address: address.to_string(),
        latitude: Some(coordinates.0),
        longitude: Some(coordinates.1),
        capacity,
        current_occupancy,
        contact: contact.to_string(),
        facilities: facilities.iter().map(ToString::to_string).collect(),
    };
    vec![
        location(
            "Community Center",
            "123 Main Street, City, State 12345",
            (40.7128, -74.0060),
            200,
            45,
            &["Food", "Water", "Medical", "Restrooms", "WiFi"],
            "555-0100",
        ),
        location(
            "High School Gymnasium",
            "456 School Road, City, State 12345",
            (40.7580, -73.9855),
            500,
            120,
            &["Food", "Water", "Restrooms", "Showers"],
            "555-0200",
        ),
        location(
            "City Hall",
            "789 Government Ave, City, State 12345",
            (40.7505, -73.9934),
            150,
            30,
            &["Food", "Water", "WiFi", "Charging Stations"],
            "555-0300",
        ),
    ]
}

pub fn sample_volunteers() -> Vec<VolunteerDraft> {
    vec![
        VolunteerDraft {
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "555-1000".to_string(),
            location: "Downtown Area".to_string(),
            skills: vec![
                "First Aid".to_string(),
                "Cooking".to_string(),
                "Translation".to_string(),
            ],
            availability: Availability::Available.to_string(),
        },
        VolunteerDraft {
            name: "Jane Smith".to_string(),
            email: "jane.smith@email.com".to_string(),
            phone: "555-2000".to_string(),
            location: "North Side".to_string(),
            skills: vec!["Medical".to_string(), "Counseling".to_string()],
            availability: Availability::Available.to_string(),
        },
    ]
}
