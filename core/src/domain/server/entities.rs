use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::units::format_display;

/// A catalog entry as stored. Numeric fields are `None` when the source value could not be
/// parsed; the raw strings keep the original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Server {
    pub id: i32,
    pub model: String,
    pub cpu: Option<String>,
    pub ram_gb: Option<i32>,
    pub hdd: String,
    pub storage_gb: Option<i32>,
    pub location_city: Option<String>,
    pub location_code: Option<String>,
    pub price_eur: Option<f64>,
    pub raw_price: String,
    pub raw_ram: String,
    pub raw_hdd: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Outbound representation of a [`Server`] with derived display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServerView {
    pub id: i32,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_gb: Option<i32>,
    pub hdd: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdd_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_gb: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_eur: Option<f64>,
    pub raw_price: String,
    pub raw_ram: String,
    pub raw_hdd: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Server> for ServerView {
    fn from(server: Server) -> Self {
        let storage_display = server.storage_gb.map(|gb| format_display(Some(gb)));
        let hdd_type = resolve_storage_type(&server.hdd);

        Self {
            id: server.id,
            model: server.model,
            cpu: server.cpu,
            ram_gb: server.ram_gb,
            hdd: server.hdd,
            hdd_type,
            storage_gb: server.storage_gb,
            storage_display,
            location_city: server.location_city,
            location_code: server.location_code,
            price_eur: server.price_eur,
            raw_price: server.raw_price,
            raw_ram: server.raw_ram,
            raw_hdd: server.raw_hdd,
            created_at: server.created_at,
            updated_at: server.updated_at,
        }
    }
}

const KNOWN_STORAGE_TYPES: [&str; 5] = ["SSD", "SATA2", "SATA3", "NVMe", "HDD"];

/// Derives a disk type tag from a raw description such as `4x480GBSSD` or `2x2TBSATA2`.
///
/// Known types are matched on the end of the string, ignoring case. Otherwise the capacity
/// units and digits are stripped and the last remaining segment is used.
pub fn resolve_storage_type(hdd: &str) -> Option<String> {
    let hdd = hdd.trim();
    if hdd.is_empty() {
        return None;
    }

    let upper = hdd.to_uppercase();
    if let Some(known) = KNOWN_STORAGE_TYPES
        .iter()
        .find(|kind| upper.ends_with(&kind.to_uppercase()))
    {
        return Some((*known).to_string());
    }

    let cleaned = upper.replace("GB", "").replace("TB", "");
    let last = cleaned
        .split(|c: char| c.is_ascii_digit())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .last();

    Some(last.unwrap_or(hdd).to_string())
}
