use serde::{Deserialize, Serialize};

use super::lenient;

/// A shelter or other safe location as stored by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SafeLocation {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub capacity: Option<i64>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub current_occupancy: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub contact: String,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub facilities: Vec<String>,
}

impl SafeLocation {
    /// Coordinates, only when both halves are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Payload for adding a safe location.
///
/// Unknown coordinates serialize as `null`; unknown counts are sent as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeLocationDraft {
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub capacity: i64,
    pub current_occupancy: i64,
    pub contact: String,
    pub facilities: Vec<String>,
}
