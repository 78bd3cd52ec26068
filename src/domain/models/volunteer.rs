use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::lenient;

/// Volunteer availability as offered by the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Limited,
    Unavailable,
}

impl Availability {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Limited => "limited",
            Self::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "limited" => Ok(Self::Limited),
            "unavailable" => Ok(Self::Unavailable),
            other => Err(format!(
                "Invalid availability: {other}. Must be one of: available, limited, unavailable"
            )),
        }
    }
}

/// A registered volunteer as stored by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
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
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub availability: String,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub registered_at: Option<String>,
}

/// Payload for registering a volunteer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub skills: Vec<String>,
    pub availability: String,
}
