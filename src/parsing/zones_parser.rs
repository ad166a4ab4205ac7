use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::db::models::DeliveryZone;
use crate::parsing::events_parser::{deserialize_id, json_type_name};

/// Custom deserializer for the zone geometry column. The export carries it
/// either as an embedded GeoJSON object or as a pre-serialized string; both
/// are kept verbatim as an opaque string and never interpreted here.
fn deserialize_geometry<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;

    Ok(value.and_then(|v| match v {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }))
}

/// Raw JSON structure for one delivery zone record (source column names)
#[derive(Debug, Deserialize)]
struct RawZoneRecord {
    #[serde(rename = "kode_pos", deserialize_with = "deserialize_id")]
    postal_code: String,
    #[serde(rename = "kecamatan", default)]
    district: Option<String>,
    #[serde(rename = "kelurahan", default)]
    subdistrict: Option<String>,
    #[serde(rename = "luas_km2", default)]
    area_km2: Option<f64>,
    #[serde(rename = "geometry", default, deserialize_with = "deserialize_geometry")]
    geometry_geojson: Option<String>,
    #[serde(rename = "id_kantor", deserialize_with = "deserialize_id")]
    office_id: String,
}

/// Parse a delivery zones JSON file into DeliveryZone structures
pub fn parse_zones(json_path: &Path) -> Result<Vec<DeliveryZone>> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read JSON file: {}", json_path.display()))?;

    parse_zones_str(&json_content)
}

/// Parse delivery zones JSON from a string
pub fn parse_zones_str(json_str: &str) -> Result<Vec<DeliveryZone>> {
    let json_value: serde_json::Value = serde_json::from_str(json_str).with_context(|| {
        let preview = if json_str.len() > 500 {
            format!("{}...", &json_str[..500])
        } else {
            json_str.to_string()
        };
        format!("Invalid JSON syntax. First 500 chars: {}", preview)
    })?;

    if !json_value.is_array() {
        anyhow::bail!(
            "Delivery zones payload must be a JSON array of records, got {}",
            json_type_name(&json_value)
        );
    }

    let records: Vec<RawZoneRecord> = serde_path_to_error::deserialize(json_value)
        .map_err(|e| anyhow::anyhow!("Invalid zone record at {}: {}", e.path(), e.inner()))?;

    Ok(records.into_iter().map(convert_raw_to_zone).collect())
}

/// Convert raw JSON structure to domain model. Missing display names become
/// empty strings; the postal code and office id are the only structural keys.
fn convert_raw_to_zone(raw: RawZoneRecord) -> DeliveryZone {
    DeliveryZone {
        postal_code: raw.postal_code,
        district: raw.district.unwrap_or_default(),
        subdistrict: raw.subdistrict.unwrap_or_default(),
        area_km2: raw.area_km2,
        geometry_geojson: raw.geometry_geojson,
        office_id: raw.office_id,
    }
}
