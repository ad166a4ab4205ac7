//! Python-facing Data Transfer Objects (DTOs).
//!
//! This module defines all `#[pyclass]` types exposed to Python through PyO3.
//! These types use only PyO3-compatible primitives (String, f64, Vec, Option)
//! and are isolated from internal Rust models that use chrono types or
//! repository-side structures.
//!
//! ## Design Guidelines
//!
//! 1. **Primitives Only**: timestamps as `%Y-%m-%dT%H:%M:%S` strings, ids as String
//! 2. **Flat Structures**: Avoid deep nesting, optimize for Python ergonomics
//! 3. **No chrono**: All datetimes converted to strings at the API boundary
//! 4. **Serializable**: All types support to/from Python dict/JSON
//! 5. **Documented**: Each field should be clear to Python users

use pyo3::prelude::*;

use serde::{Deserialize, Serialize};

// =========================================================
// Delivery Event Types
// =========================================================

/// One delivery event row, classified and ready to render.
#[pyclass(module = "antaran_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryEventRow {
    /// Shipment tracking number (connote)
    pub tracking_id: String,
    pub product_code: Option<String>,
    pub shipment_type: Option<String>,
    /// Free-text status as recorded by the source system
    pub raw_status: Option<String>,
    pub courier_id: String,
    pub office_id: String,
    pub recipient_name: Option<String>,
    pub recipient_address: Option<String>,
    pub note: Option<String>,
    /// Local event time, `%Y-%m-%dT%H:%M:%S`, None when unrecorded
    pub event_time: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Canonical outcome token: DELIVERED, FAILED or OTHER
    pub outcome: String,
    /// Map marker color hint: green, red or orange
    pub marker_color: String,
}

// =========================================================
// Resume Types
// =========================================================

/// Outcome counts and percentages for one product group.
#[pyclass(module = "antaran_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResumeEntry {
    /// Product code; empty string groups events without one
    pub product_code: String,
    pub total: usize,
    pub delivered: usize,
    pub failed: usize,
    pub other: usize,
    pub pct_delivered: f64,
    pub pct_failed: f64,
    pub pct_other: f64,
}

/// Delivery resume: overall counts plus per-product breakdown.
#[pyclass(module = "antaran_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryResumeData {
    pub total: usize,
    pub delivered: usize,
    pub failed: usize,
    pub other: usize,
    pub pct_delivered: f64,
    pub pct_failed: f64,
    pub pct_other: f64,
    /// Per-product entries sorted ascending by product code
    pub products: Vec<ProductResumeEntry>,
}

// =========================================================
// Time Effectiveness Types
// =========================================================

/// Gap between one event and its predecessor in time order.
#[pyclass(module = "antaran_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventGapEntry {
    pub tracking_id: String,
    /// Local event time, `%Y-%m-%dT%H:%M:%S`
    pub event_time: String,
    /// Minutes since the previous event; 0.0 for the first
    pub gap_minutes: f64,
}

/// Working-time statistics over the timestamped events of one day.
#[pyclass(module = "antaran_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEffectivenessData {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub duration_minutes: f64,
    pub average_minutes: f64,
    pub analyzed_count: usize,
    pub gaps: Vec<EventGapEntry>,
}

// =========================================================
// History Bundle Types
// =========================================================

/// Complete dataset for the delivery-history page.
#[pyclass(module = "antaran_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryHistoryData {
    pub events: Vec<DeliveryEventRow>,
    pub resume: DeliveryResumeData,
    pub time_effectiveness: TimeEffectivenessData,
    /// Mean latitude of located events, None when none carry a position
    pub center_latitude: Option<f64>,
    /// Mean longitude of located events, None when none carry a position
    pub center_longitude: Option<f64>,
    pub total_count: usize,
    pub delivered_count: usize,
    pub failed_count: usize,
    pub other_count: usize,
}

// =========================================================
// Courier Types
// =========================================================

/// Courier entry for selection widgets.
#[pyclass(module = "antaran_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierInfo {
    pub courier_id: String,
    pub name: String,
    pub office_id: String,
    /// Picker label: `"{id} - {name}"`
    pub label: String,
}

#[pymethods]
impl CourierInfo {
    fn __repr__(&self) -> String {
        format!(
            "CourierInfo(id='{}', name='{}', office='{}')",
            self.courier_id, self.name, self.office_id
        )
    }
}

// =========================================================
// Zone Map Types
// =========================================================

/// One delivery zone row joined with its assigned color.
#[pyclass(module = "antaran_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneRow {
    pub postal_code: String,
    pub district: String,
    pub subdistrict: String,
    pub area_km2: Option<f64>,
    /// Opaque GeoJSON geometry, passed through untouched
    pub geometry_geojson: Option<String>,
    pub office_id: String,
    /// Hex color assigned to this postal code
    pub color: String,
}

/// Complete dataset for the zone map page.
#[pyclass(module = "antaran_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneMapData {
    pub zones: Vec<ZoneRow>,
    pub total_count: usize,
    /// Palette the zone colors were drawn from
    pub palette: Vec<String>,
}
