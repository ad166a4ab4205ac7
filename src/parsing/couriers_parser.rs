use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::db::models::Courier;
use crate::parsing::events_parser::{deserialize_id, json_type_name};

/// Raw JSON structure for one courier record (source column names)
#[derive(Debug, Deserialize)]
struct RawCourierRecord {
    #[serde(rename = "id_petugas", deserialize_with = "deserialize_id")]
    courier_id: String,
    #[serde(rename = "nama", alias = "nama_petugas", default)]
    name: Option<String>,
    #[serde(rename = "id_kantor", deserialize_with = "deserialize_id")]
    office_id: String,
}

/// Parse a couriers JSON file into Courier structures
pub fn parse_couriers(json_path: &Path) -> Result<Vec<Courier>> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read JSON file: {}", json_path.display()))?;

    parse_couriers_str(&json_content)
}

/// Parse couriers JSON from a string
pub fn parse_couriers_str(json_str: &str) -> Result<Vec<Courier>> {
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
            "Couriers payload must be a JSON array of records, got {}",
            json_type_name(&json_value)
        );
    }

    let records: Vec<RawCourierRecord> = serde_path_to_error::deserialize(json_value)
        .map_err(|e| anyhow::anyhow!("Invalid courier record at {}: {}", e.path(), e.inner()))?;

    Ok(records
        .into_iter()
        .map(|raw| Courier::new(raw.courier_id, raw.name.unwrap_or_default(), raw.office_id))
        .collect())
}
