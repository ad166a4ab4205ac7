use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::db::models::{DeliveryEvent, GeoPoint};

/// Timestamp layouts accepted for `waktu_kejadian`, tried in order.
const EVENT_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Custom deserializer that accepts either string or number for identifier
/// fields. The source system exports numeric office ids and tracking numbers
/// as bare numbers or strings depending on the query tool.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Int(i64),
        Float(f64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Int(i) => i.to_string(),
        StringOrNumber::Float(f) => f.to_string(),
    })
}

/// Raw JSON structure for one delivery record as exported by the dashboard
/// (`to_json(orient="records")` row shape, source column names)
#[derive(Debug, Deserialize)]
struct RawDeliveryRecord {
    #[serde(rename = "connote", deserialize_with = "deserialize_id")]
    tracking_id: String,
    #[serde(rename = "produk", default)]
    product_code: Option<String>,
    #[serde(rename = "jenis_kiriman", default)]
    shipment_type: Option<String>,
    #[serde(rename = "status_antaran", default)]
    raw_status: Option<String>,
    #[serde(rename = "id_petugas", deserialize_with = "deserialize_id")]
    courier_id: String,
    #[serde(rename = "id_kantor", deserialize_with = "deserialize_id")]
    office_id: String,
    #[serde(rename = "penerima", default)]
    recipient_name: Option<String>,
    #[serde(rename = "alamat_penerima", default)]
    recipient_address: Option<String>,
    #[serde(rename = "keterangan", default)]
    note: Option<String>,
    #[serde(rename = "waktu_kejadian", default)]
    event_time: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

/// Parse a delivery event timestamp in any of the accepted layouts.
///
/// RFC 3339 values with an explicit offset keep their local wall-clock part;
/// the source system records local times and the dashboard filters by local
/// date.
fn parse_event_time(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    for format in EVENT_TIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(timestamp);
        }
    }

    if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_local());
    }

    None
}

/// Parse a delivery events JSON file into DeliveryEvent structures
pub fn parse_delivery_events(json_path: &Path) -> Result<Vec<DeliveryEvent>> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read JSON file: {}", json_path.display()))?;

    parse_delivery_events_str(&json_content)
}

/// Parse delivery events JSON from a string
pub fn parse_delivery_events_str(json_str: &str) -> Result<Vec<DeliveryEvent>> {
    // First validate that it's valid JSON
    let json_value: serde_json::Value = serde_json::from_str(json_str).with_context(|| {
        let preview = if json_str.len() > 500 {
            format!("{}...", &json_str[..500])
        } else {
            json_str.to_string()
        };
        format!("Invalid JSON syntax. First 500 chars: {}", preview)
    })?;

    // The payload must be an array of record objects
    if !json_value.is_array() {
        anyhow::bail!(
            "Delivery events payload must be a JSON array of records, got {}",
            json_type_name(&json_value)
        );
    }

    // Deserialize with the failing record path ([index].field) in the error
    let records: Vec<RawDeliveryRecord> = serde_path_to_error::deserialize(json_value)
        .map_err(|e| {
            anyhow::anyhow!("Invalid delivery event record at {}: {}", e.path(), e.inner())
        })?;

    Ok(records.into_iter().map(convert_raw_to_event).collect())
}

/// Convert raw JSON structure to domain model
fn convert_raw_to_event(raw: RawDeliveryRecord) -> DeliveryEvent {
    let event_time = raw.event_time.as_deref().and_then(|value| {
        let parsed = parse_event_time(value);
        if parsed.is_none() && !value.trim().is_empty() {
            log::warn!(
                "Dropping unparseable event time '{}' for tracking id {}",
                value,
                raw.tracking_id
            );
        }
        parsed
    });

    // A position needs both coordinates; a lone latitude is useless
    let location = match (raw.latitude, raw.longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoPoint::new(latitude, longitude)),
        _ => None,
    };

    DeliveryEvent {
        tracking_id: raw.tracking_id,
        product_code: raw.product_code,
        shipment_type: raw.shipment_type,
        raw_status: raw.raw_status,
        courier_id: raw.courier_id,
        office_id: raw.office_id,
        recipient_name: raw.recipient_name,
        recipient_address: raw.recipient_address,
        note: raw.note,
        event_time,
        location,
    }
}

/// Human-readable JSON type name for error messages
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
