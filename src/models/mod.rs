use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rental property as served by the `properties` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalProperty {
    #[serde(rename = "PropertyID")]
    pub id: i64,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "PictureLink")]
    pub picture_link: String,
    #[serde(rename = "OpenTime1", default)]
    pub open_time_1: i64,
    #[serde(rename = "OpenTime2", default)]
    pub open_time_2: i64,
}

impl RentalProperty {
    /// Full locator of the property picture.
    ///
    /// The picture link is appended verbatim to the base URL, so the base is
    /// expected to carry its trailing slash.
    pub fn picture_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.picture_link)
    }
}

/// Client contact record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "full_name")]
    pub full_name: String,
    pub email: String,
}

/// A scheduled visit of a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitInfo {
    pub visitor_email: String,
    pub properties_addr: String,
    pub visit_time: String,
}

/// Properties exported to disk together with the time they were fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySnapshot {
    pub fetched_at: DateTime<Utc>,
    pub properties: Vec<RentalProperty>,
}

impl PropertySnapshot {
    pub fn now(properties: Vec<RentalProperty>) -> Self {
        Self {
            fetched_at: Utc::now(),
            properties,
        }
    }
}
