//! Record kind descriptors.
//!
//! A descriptor is everything that differs between the four collections:
//! the endpoint, how a draft is read out of a form, how a record renders,
//! and the messages shown to the user. The sync controller is generic over
//! [`RecordKind`] and contains no per-kind logic.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::application::form_fields::{parse_coordinate, parse_count, split_list};
use crate::domain::models::{
    Alert, AlertDraft, Helpline, HelplineDraft, SafeLocation, SafeLocationDraft, Volunteer,
    VolunteerDraft,
};
use crate::domain::ports::FormSource;
use crate::render::{
    format_timestamp, render_alert, render_helpline, render_safe_location, render_volunteer,
};

/// User-facing text for one record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindMessages {
    /// Placeholder for an empty collection
    pub empty: &'static str,
    /// Region content after a failed load
    pub load_failed: &'static str,
    /// Notice after a successful submit
    pub submitted: &'static str,
    /// Notice after a failed submit
    pub submit_failed: &'static str,
}

/// Descriptor for one record kind.
pub trait RecordKind: Send + Sync + 'static {
    /// Record as returned by the collection endpoint
    type Record: DeserializeOwned + Serialize + Send + Sync;
    /// Payload sent to create a record
    type Draft: Serialize + Send + Sync;

    /// Short name used in logs and errors
    const NAME: &'static str;
    /// Collection endpoint path
    const ENDPOINT: &'static str;
    const MESSAGES: KindMessages;
    /// Form fields read by [`RecordKind::extract`]
    const FIELDS: &'static [&'static str];
    /// Column headers matching [`RecordKind::summary`]
    const COLUMNS: &'static [&'static str];

    /// Build a draft from the form's current values.
    fn extract(form: &dyn FormSource) -> Self::Draft;

    /// Render one record as an HTML card.
    fn render(record: &Self::Record) -> String;

    /// One table row for terminal listings.
    fn summary(record: &Self::Record) -> Vec<String>;
}

/// Public alerts.
#[derive(Debug, Clone, Copy)]
pub struct Alerts;

impl Alerts {
    pub const TITLE: &'static str = "title";
    pub const MESSAGE: &'static str = "message";
    pub const SEVERITY: &'static str = "severity";
    pub const LOCATION: &'static str = "location";
}

impl RecordKind for Alerts {
    type Record = Alert;
    type Draft = AlertDraft;

    const NAME: &'static str = "alerts";
    const ENDPOINT: &'static str = "/api/alerts";
    const MESSAGES: KindMessages = KindMessages {
        empty: "No alerts available. Be the first to post one!",
        load_failed: "Error loading alerts. Please try again later.",
        submitted: "Alert posted successfully!",
        submit_failed: "Error posting alert. Please try again.",
    };
    const FIELDS: &'static [&'static str] =
        &[Self::TITLE, Self::MESSAGE, Self::SEVERITY, Self::LOCATION];
    const COLUMNS: &'static [&'static str] = &["Severity", "Title", "Location", "Posted"];

    fn extract(form: &dyn FormSource) -> AlertDraft {
        AlertDraft {
            title: form.value(Self::TITLE),
            message: form.value(Self::MESSAGE),
            severity: form.value(Self::SEVERITY),
            location: form.value(Self::LOCATION),
        }
    }

    fn render(record: &Alert) -> String {
        render_alert(record)
    }

    fn summary(record: &Alert) -> Vec<String> {
        vec![
            record.severity.to_uppercase(),
            record.title.clone(),
            record.location.clone(),
            record
                .timestamp
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_default(),
        ]
    }
}

/// Emergency phone lines.
#[derive(Debug, Clone, Copy)]
pub struct Helplines;

impl Helplines {
    pub const NAME_FIELD: &'static str = "name";
    pub const NUMBER: &'static str = "number";
    pub const CATEGORY: &'static str = "category";
    pub const DESCRIPTION: &'static str = "description";
}

impl RecordKind for Helplines {
    type Record = Helpline;
    type Draft = HelplineDraft;

    const NAME: &'static str = "helplines";
    const ENDPOINT: &'static str = "/api/helplines";
    const MESSAGES: KindMessages = KindMessages {
        empty: "No helplines available. Add one to help others!",
        load_failed: "Error loading helplines. Please try again later.",
        submitted: "Helpline added successfully!",
        submit_failed: "Error adding helpline. Please try again.",
    };
    const FIELDS: &'static [&'static str] = &[
        Self::NAME_FIELD,
        Self::NUMBER,
        Self::CATEGORY,
        Self::DESCRIPTION,
    ];
    const COLUMNS: &'static [&'static str] = &["Name", "Number", "Category"];

    fn extract(form: &dyn FormSource) -> HelplineDraft {
        HelplineDraft {
            name: form.value(Self::NAME_FIELD),
            number: form.value(Self::NUMBER),
            category: form.value(Self::CATEGORY),
            description: form.value(Self::DESCRIPTION),
        }
    }

    fn render(record: &Helpline) -> String {
        render_helpline(record)
    }

    fn summary(record: &Helpline) -> Vec<String> {
        vec![
            record.name.clone(),
            record.number.clone(),
            record.category.clone(),
        ]
    }
}

/// Shelters and other safe locations.
#[derive(Debug, Clone, Copy)]
pub struct SafeLocations;

impl SafeLocations {
    pub const NAME_FIELD: &'static str = "name";
    pub const ADDRESS: &'static str = "address";
    pub const LATITUDE: &'static str = "latitude";
    pub const LONGITUDE: &'static str = "longitude";
    pub const CAPACITY: &'static str = "capacity";
    pub const OCCUPANCY: &'static str = "current_occupancy";
    pub const CONTACT: &'static str = "contact";
    pub const FACILITIES: &'static str = "facilities";
}

impl RecordKind for SafeLocations {
    type Record = SafeLocation;
    type Draft = SafeLocationDraft;

    const NAME: &'static str = "safe-locations";
    const ENDPOINT: &'static str = "/api/safe-locations";
    const MESSAGES: KindMessages = KindMessages {
        empty: "No safe locations available. Add one to help others find shelter!",
        load_failed: "Error loading safe locations. Please try again later.",
        submitted: "Safe location added successfully!",
        submit_failed: "Error adding location. Please try again.",
    };
    const FIELDS: &'static [&'static str] = &[
        Self::NAME_FIELD,
        Self::ADDRESS,
        Self::LATITUDE,
        Self::LONGITUDE,
        Self::CAPACITY,
        Self::OCCUPANCY,
        Self::CONTACT,
        Self::FACILITIES,
    ];
    const COLUMNS: &'static [&'static str] = &["Name", "Address", "Occupancy", "Facilities"];

    fn extract(form: &dyn FormSource) -> SafeLocationDraft {
        SafeLocationDraft {
            name: form.value(Self::NAME_FIELD),
            address: form.value(Self::ADDRESS),
            latitude: parse_coordinate(&form.value(Self::LATITUDE)),
            longitude: parse_coordinate(&form.value(Self::LONGITUDE)),
            capacity: parse_count(&form.value(Self::CAPACITY)),
            current_occupancy: parse_count(&form.value(Self::OCCUPANCY)),
            contact: form.value(Self::CONTACT),
            facilities: split_list(&form.value(Self::FACILITIES)),
        }
    }

    fn render(record: &SafeLocation) -> String {
        render_safe_location(record)
    }

    fn summary(record: &SafeLocation) -> Vec<String> {
        let capacity = match record.capacity {
            Some(capacity) if capacity != 0 => capacity.to_string(),
            _ => "N/A".to_string(),
        };
        vec![
            record.name.clone(),
            record.address.clone(),
            format!("{}/{}", record.current_occupancy.unwrap_or(0), capacity),
            record.facilities.join(", "),
        ]
    }
}

/// Registered volunteers.
#[derive(Debug, Clone, Copy)]
pub struct Volunteers;

impl Volunteers {
    pub const NAME_FIELD: &'static str = "name";
    pub const EMAIL: &'static str = "email";
    pub const PHONE: &'static str = "phone";
    pub const LOCATION: &'static str = "location";
    pub const SKILLS: &'static str = "skills";
    pub const AVAILABILITY: &'static str = "availability";
}

impl RecordKind for Volunteers {
    type Record = Volunteer;
    type Draft = VolunteerDraft;

    const NAME: &'static str = "volunteers";
    const ENDPOINT: &'static str = "/api/volunteers";
    const MESSAGES: KindMessages = KindMessages {
        empty: "No volunteers registered yet. Be the first to help!",
        load_failed: "Error loading volunteers. Please try again later.",
        submitted: "Thank you for registering as a volunteer!",
        submit_failed: "Error registering. Please try again.",
    };
    const FIELDS: &'static [&'static str] = &[
        Self::NAME_FIELD,
        Self::EMAIL,
        Self::PHONE,
        Self::LOCATION,
        Self::SKILLS,
        Self::AVAILABILITY,
    ];
    const COLUMNS: &'static [&'static str] = &["Name", "Availability", "Phone", "Skills"];

    fn extract(form: &dyn FormSource) -> VolunteerDraft {
        VolunteerDraft {
            name: form.value(Self::NAME_FIELD),
            email: form.value(Self::EMAIL),
            phone: form.value(Self::PHONE),
            location: form.value(Self::LOCATION),
            skills: split_list(&form.value(Self::SKILLS)),
            availability: form.value(Self::AVAILABILITY),
        }
    }

    fn render(record: &Volunteer) -> String {
        render_volunteer(record)
    }

    fn summary(record: &Volunteer) -> Vec<String> {
        vec![
            record.name.clone(),
            record.availability.clone(),
            record.phone.clone(),
            record.skills.join(", "),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FormState;

    #[test]
    fn test_alert_extract_keeps_empty_location() {
        let form = FormState::from_pairs([
            (Alerts::TITLE, "Flood"),
            (Alerts::MESSAGE, "Evacuate"),
            (Alerts::SEVERITY, "critical"),
        ]);
        let value = serde_json::to_value(Alerts::extract(&form)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Flood",
                "message": "Evacuate",
                "severity": "critical",
                "location": ""
            })
        );
    }

    #[test]
    fn test_safe_location_extract_applies_fallbacks() {
        let form = FormState::from_pairs([
            (SafeLocations::NAME_FIELD, "Gym"),
            (SafeLocations::LATITUDE, "not a number"),
            (SafeLocations::LONGITUDE, "-73.9855"),
            (SafeLocations::CAPACITY, "lots"),
            (SafeLocations::OCCUPANCY, "120"),
            (SafeLocations::FACILITIES, "Food, Water ,, Showers"),
        ]);
        let draft = SafeLocations::extract(&form);
        assert_eq!(draft.latitude, None);
        assert_eq!(draft.longitude, Some(-73.9855));
        assert_eq!(draft.capacity, 0);
        assert_eq!(draft.current_occupancy, 120);
        assert_eq!(draft.facilities, vec!["Food", "Water", "Showers"]);

        let value = serde_json::to_value(&draft).unwrap();
        assert!(value["latitude"].is_null());
    }

    #[test]
    fn test_volunteer_extract_splits_skills() {
        let form = FormState::from_pairs([
            (Volunteers::SKILLS, " First Aid,Cooking, ,First Aid "),
            (Volunteers::AVAILABILITY, "available"),
        ]);
        let draft = Volunteers::extract(&form);
        assert_eq!(draft.skills, vec!["First Aid", "Cooking", "First Aid"]);
        assert_eq!(draft.availability, "available");
        assert_eq!(draft.name, "");
    }

    #[test]
    fn test_columns_match_summary_width() {
        assert_eq!(
            Alerts::summary(&Alert::default()).len(),
            Alerts::COLUMNS.len()
        );
        assert_eq!(
            Helplines::summary(&Helpline::default()).len(),
            Helplines::COLUMNS.len()
        );
        assert_eq!(
            SafeLocations::summary(&SafeLocation::default()).len(),
            SafeLocations::COLUMNS.len()
        );
        assert_eq!(
            Volunteers::summary(&Volunteer::default()).len(),
            Volunteers::COLUMNS.len()
        );
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(Alerts::ENDPOINT, "/api/alerts");
        assert_eq!(Helplines::ENDPOINT, "/api/helplines");
        assert_eq!(SafeLocations::ENDPOINT, "/api/safe-locations");
        assert_eq!(Volunteers::ENDPOINT, "/api/volunteers");
    }
}
