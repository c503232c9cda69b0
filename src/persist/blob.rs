//! Stable on-disk representation of the collection blob.
//!
//! The whole collection serializes as one JSON array of records under a
//! fixed key. Tag enums are stored as their plain text labels and are
//! not validated at this layer; unknown labels survive a round trip as
//! custom values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    record::{BrewRecord, DEFAULT_GRINDER},
    types::{BrewMethod, RoastLevel, Temperature, TemperatureUnit},
};

use super::PersistResult;

/// Fixed key under which the collection blob is stored.
pub const BLOB_KEY: &str = "brewLogsData";

/// Wire form of one record. Field names are frozen; optional fields may
/// be null or missing entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlobRecord {
    id: Uuid,
    timestamp: DateTime<Utc>,
    coffee_name: String,
    dose: f64,
    grind_setting: String,
    water_amount: f64,
    method: String,
    roast_level: String,
    #[serde(default)]
    water_temperature: Option<f64>,
    #[serde(default)]
    temperature_unit: Option<String>,
    #[serde(default)]
    brew_time: Option<f64>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    rating: Option<u8>,
    #[serde(default = "default_grinder")]
    grinder_type: String,
}

fn default_grinder() -> String {
    DEFAULT_GRINDER.to_string()
}

impl From<&BrewRecord> for BlobRecord {
    fn from(record: &BrewRecord) -> Self {
        Self {
            id: record.id,
            timestamp: record.timestamp,
            coffee_name: record.coffee_name.clone(),
            dose: record.dose,
            grind_setting: record.grind_setting.clone(),
            water_amount: record.water_amount,
            method: record.method.as_str().to_string(),
            roast_level: record.roast_level.as_str().to_string(),
            water_temperature: record.water_temperature.map(|t| t.value),
            temperature_unit: record
                .water_temperature
                .map(|t| t.unit.as_str().to_string()),
            brew_time: record.brew_time,
            notes: record.notes.clone(),
            rating: record.rating,
            grinder_type: record.grinder_type.clone(),
        }
    }
}

impl From<BlobRecord> for BrewRecord {
    fn from(raw: BlobRecord) -> Self {
        // A temperature without a recognizable unit resolves to absent.
        let water_temperature = match (raw.water_temperature, raw.temperature_unit) {
            (Some(value), Some(unit)) => {
                TemperatureUnit::from_label(&unit).map(|unit| Temperature { value, unit })
            }
            _ => None,
        };

        Self {
            id: raw.id,
            timestamp: raw.timestamp,
            coffee_name: raw.coffee_name,
            dose: raw.dose,
            grind_setting: raw.grind_setting,
            water_amount: raw.water_amount,
            method: BrewMethod::from_label(&raw.method),
            roast_level: RoastLevel::from_label(&raw.roast_level),
            water_temperature,
            brew_time: raw.brew_time,
            notes: raw.notes,
            rating: raw.rating,
            grinder_type: raw.grinder_type,
        }
    }
}

/// Serializes the whole collection into one blob.
pub fn encode(records: &[BrewRecord]) -> PersistResult<Vec<u8>> {
    let wire: Vec<BlobRecord> = records.iter().map(BlobRecord::from).collect();
    Ok(serde_json::to_vec(&wire)?)
}

/// Decodes a blob back into records.
pub fn decode(bytes: &[u8]) -> PersistResult<Vec<BrewRecord>> {
    let wire: Vec<BlobRecord> = serde_json::from_slice(bytes)?;
    Ok(wire.into_iter().map(BrewRecord::from).collect())
}
