pub mod alert;
pub mod config;
pub mod helpline;
mod lenient;
pub mod notice;
pub mod safe_location;
pub mod volunteer;

pub use alert::{Alert, AlertDraft, Severity};
pub use config::{Config, LoggingConfig, NoticeConfig, ServerConfig};
pub use helpline::{Helpline, HelplineDraft};
pub use notice::{Notice, NoticeLevel};
pub use safe_location::{SafeLocation, SafeLocationDraft};
pub use volunteer::{Availability, Volunteer, VolunteerDraft};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_deserialization_from_flask() {
        let json = r#"{
            "_id": "6710c0ffee",
            "title": "Heavy Rainfall Warning",
            "message": "Stay indoors.",
            "severity": "high",
            "location": "Downtown Area",
            "timestamp": "Sat, 18 Oct 2026 10:00:00 GMT"
        }"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.id.as_deref(), Some("6710c0ffee"));
        assert_eq!(alert.severity, "high");
        assert_eq!(
            alert.timestamp.as_deref(),
            Some("Sat, 18 Oct 2026 10:00:00 GMT")
        );
    }

    #[test]
    fn test_partial_records_decode_with_defaults() {
        let json = r#"{ "name": "Gym", "facilities": null, "capacity": null, "contact": null }"#;
        let location: SafeLocation = serde_json::from_str(json).unwrap();
        assert_eq!(location.name, "Gym");
        assert!(location.facilities.is_empty());
        assert_eq!(location.capacity, None);
        assert_eq!(location.contact, "");
        assert_eq!(location.coordinates(), None);

        let volunteer: Volunteer = serde_json::from_str(r#"{ "title": null }"#).unwrap();
        assert_eq!(volunteer, Volunteer::default());
    }

    #[test]
    fn test_odd_scalar_types_are_coerced() {
        let json = r#"{
            "_id": 17,
            "name": "Gym",
            "address": null,
            "latitude": "40.7580",
            "longitude": {"deg": -73},
            "capacity": 500.0,
            "current_occupancy": "120",
            "contact": 5550200,
            "facilities": ["Food", 3, null, {"x": 1}, true]
        }"#;
        let location: SafeLocation = serde_json::from_str(json).unwrap();
        assert_eq!(location.id.as_deref(), Some("17"));
        assert_eq!(location.address, "");
        assert_eq!(location.latitude, Some(40.758));
        assert_eq!(location.longitude, None);
        assert_eq!(location.capacity, Some(500));
        assert_eq!(location.current_occupancy, Some(120));
        assert_eq!(location.contact, "5550200");
        assert_eq!(location.facilities, vec!["Food", "3", "true"]);
    }

    #[test]
    fn test_unusable_numbers_read_as_unknown() {
        let json = r#"{ "capacity": "lots", "current_occupancy": [1], "latitude": "NaN" }"#;
        let location: SafeLocation = serde_json::from_str(json).unwrap();
        assert_eq!(location.capacity, None);
        assert_eq!(location.current_occupancy, None);
        assert_eq!(location.latitude, None);

        let volunteer: Volunteer =
            serde_json::from_str(r#"{ "skills": "Cooking", "registered_at": 1729245600 }"#)
                .unwrap();
        assert_eq!(volunteer.skills, vec!["Cooking"]);
        assert_eq!(volunteer.registered_at.as_deref(), Some("1729245600"));
    }

    #[test]
    fn test_non_object_record_is_rejected() {
        assert!(serde_json::from_str::<Alert>(r#""just text""#).is_err());
        assert!(serde_json::from_str::<Helpline>("42").is_err());
    }

    #[test]
    fn test_safe_location_draft_serializes_null_coordinates() {
        let draft = SafeLocationDraft {
            name: "Hall".to_string(),
            address: "1 Main St".to_string(),
            latitude: None,
            longitude: Some(-74.006),
            capacity: 0,
            current_occupancy: 0,
            contact: String::new(),
            facilities: vec![],
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value["latitude"].is_null());
        assert_eq!(value["longitude"], serde_json::json!(-74.006));
        assert_eq!(value["capacity"], serde_json::json!(0));
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("CRITICAL".parse::<Severity>().unwrap(), Severity::Critical);
        assert!("severe".parse::<Severity>().is_err());
        assert_eq!(Severity::default().as_str(), "medium");
        assert_eq!(
            " limited ".parse::<Availability>().unwrap(),
            Availability::Limited
        );
        assert_eq!(Availability::default().to_string(), "available");
    }
}
