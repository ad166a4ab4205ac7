//! Streamlit API Functions.
//!
//! This module contains all `#[pyfunction]` exports for the Streamlit Python
//! application. Each function acts as a thin wrapper around internal
//! service/repository calls, converting between API DTOs and internal models
//! at the boundary.
//!
//! ## Design Patterns
//!
//! 1. Accept primitives or JSON strings as parameters
//! 2. Parse and validate caller input up front (`ValueError` on violation)
//! 3. Call internal service/repository methods
//! 4. Convert results back to API DTOs
//! 5. Return to Python with proper error handling (`RuntimeError` on failure)

use chrono::NaiveDate;
use pyo3::prelude::*;
use tokio::runtime::Runtime;

use crate::api::types as api;
use crate::db::RepositoryError;
use crate::parsing;
use crate::services;

/// Register all API functions with the Python module.
///
/// This function is called from lib.rs to populate the antaran_rust module
/// with all exported functions and classes.
pub fn register_api_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Repository initialization
    m.add_function(wrap_pyfunction!(init_repository, m)?)?;
    m.add_function(wrap_pyfunction!(db_health_check, m)?)?;

    // Seeding / materialization operations
    m.add_function(wrap_pyfunction!(store_delivery_events, m)?)?;
    m.add_function(wrap_pyfunction!(store_couriers, m)?)?;
    m.add_function(wrap_pyfunction!(store_delivery_zones, m)?)?;

    // Courier selection
    m.add_function(wrap_pyfunction!(list_couriers, m)?)?;

    // Delivery history analytics
    m.add_function(wrap_pyfunction!(get_delivery_history_data, m)?)?;
    m.add_function(wrap_pyfunction!(compute_delivery_history, m)?)?;
    m.add_function(wrap_pyfunction!(classify_delivery_status, m)?)?;

    // Zone map
    m.add_function(wrap_pyfunction!(get_zone_color, m)?)?;
    m.add_function(wrap_pyfunction!(get_zone_map_data, m)?)?;

    // Register all API classes
    m.add_class::<api::DeliveryEventRow>()?;
    m.add_class::<api::ProductResumeEntry>()?;
    m.add_class::<api::DeliveryResumeData>()?;
    m.add_class::<api::EventGapEntry>()?;
    m.add_class::<api::TimeEffectivenessData>()?;
    m.add_class::<api::DeliveryHistoryData>()?;
    m.add_class::<api::CourierInfo>()?;
    m.add_class::<api::ZoneRow>()?;
    m.add_class::<api::ZoneMapData>()?;

    Ok(())
}

/// Build the blocking runtime used by synchronous Python entry points.
fn new_runtime() -> PyResult<Runtime> {
    Runtime::new().map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
            "Failed to create async runtime: {}",
            e
        ))
    })
}

// =========================================================
// Repository Operations
// =========================================================

/// Initialize the repository backend.
///
/// This function must be called before any other repository operation.
/// It sets up the global repository singleton based on configuration.
#[pyfunction]
fn init_repository() -> PyResult<()> {
    crate::db::init_repository()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
}

/// Check repository health and connectivity.
///
/// Returns:
///     True when the backend is reachable and healthy
#[pyfunction]
fn db_health_check() -> PyResult<bool> {
    let runtime = new_runtime()?;
    let repo = crate::db::get_repository()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?;
    runtime
        .block_on(repo.health_check())
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!("{}", e)))
}

// =========================================================
// Seeding Operations
// =========================================================

/// Store delivery event records in the repository.
///
/// Args:
///     events_json: JSON array of event records in the source row shape
///
/// Returns:
///     Number of events stored
#[pyfunction]
fn store_delivery_events(events_json: String) -> PyResult<usize> {
    let events = parsing::parse_delivery_events_str(&events_json).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Failed to parse delivery events: {}",
            e
        ))
    })?;

    let runtime = new_runtime()?;
    let repo = crate::db::get_repository()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?;
    runtime.block_on(repo.store_delivery_events(&events)).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
            "Failed to store delivery events: {}",
            e
        ))
    })
}

/// Store courier records in the repository.
///
/// Args:
///     couriers_json: JSON array of courier records
///
/// Returns:
///     Number of couriers stored
#[pyfunction]
fn store_couriers(couriers_json: String) -> PyResult<usize> {
    let couriers = parsing::parse_couriers_str(&couriers_json).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Failed to parse couriers: {}",
            e
        ))
    })?;

    let runtime = new_runtime()?;
    let repo = crate::db::get_repository()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?;
    runtime
        .block_on(async {
            let mut stored = 0usize;
            for courier in &couriers {
                repo.store_courier(courier).await?;
                stored += 1;
            }
            Ok::<usize, RepositoryError>(stored)
        })
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Failed to store couriers: {}",
                e
            ))
        })
}

/// Store delivery zone records in the repository.
///
/// Args:
///     zones_json: JSON array of zone records
///
/// Returns:
///     Number of zones stored
#[pyfunction]
fn store_delivery_zones(zones_json: String) -> PyResult<usize> {
    let zones = parsing::parse_zones_str(&zones_json).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Failed to parse zones: {}", e))
    })?;

    let runtime = new_runtime()?;
    let repo = crate::db::get_repository()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?;
    runtime
        .block_on(async {
            let mut stored = 0usize;
            for zone in &zones {
                repo.store_zone(zone).await?;
                stored += 1;
            }
            Ok::<usize, RepositoryError>(stored)
        })
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Failed to store zones: {}",
                e
            ))
        })
}

// =========================================================
// Courier Selection
// =========================================================

/// List the couriers of one delivery office.
///
/// Args:
///     office_id: Delivery office identifier
///
/// Returns:
///     CourierInfo entries sorted by courier id, with picker labels
#[pyfunction]
fn list_couriers(office_id: String) -> PyResult<Vec<api::CourierInfo>> {
    let runtime = new_runtime()?;
    let repo = crate::db::get_repository()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?;
    let couriers = runtime.block_on(repo.list_couriers(&office_id)).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
            "Failed to list couriers: {}",
            e
        ))
    })?;
    Ok(couriers.iter().map(|c| c.into()).collect())
}

// =========================================================
// Delivery History Analytics
// =========================================================

/// Get the complete delivery-history dataset for one courier and day.
///
/// Args:
///     courier_id: Courier identifier
///     office_id: Delivery office identifier
///     date: Local date, `YYYY-MM-DD`
///
/// Returns:
///     DeliveryHistoryData with classified rows, resume and time report
#[pyfunction]
fn get_delivery_history_data(
    courier_id: String,
    office_id: String,
    date: String,
) -> PyResult<api::DeliveryHistoryData> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Invalid date '{}', expected YYYY-MM-DD: {}",
            date, e
        ))
    })?;

    let runtime = new_runtime()?;
    let bundle = runtime
        .block_on(services::get_delivery_history_data(
            &courier_id,
            &office_id,
            date,
        ))
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e))?;
    Ok((&bundle).into())
}

/// Compute the delivery-history dataset from materialized event rows.
///
/// The dashboard already holds the query result; this path analyzes it
/// without touching the repository.
///
/// Args:
///     events_json: JSON array of event records in the source row shape
///
/// Returns:
///     DeliveryHistoryData with classified rows, resume and time report
#[pyfunction]
fn compute_delivery_history(events_json: String) -> PyResult<api::DeliveryHistoryData> {
    let events = parsing::parse_delivery_events_str(&events_json).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Failed to parse delivery events: {}",
            e
        ))
    })?;

    let bundle = services::compute_delivery_history(events)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e))?;
    Ok((&bundle).into())
}

/// Classify a raw delivery status into its canonical outcome token.
///
/// Args:
///     raw_status: Free-text status, or None
///
/// Returns:
///     "DELIVERED", "FAILED" or "OTHER"
#[pyfunction]
#[pyo3(signature = (raw_status=None))]
fn classify_delivery_status(raw_status: Option<String>) -> PyResult<String> {
    Ok(services::classify_status(raw_status.as_deref())
        .as_str()
        .to_string())
}

// =========================================================
// Zone Map
// =========================================================

/// Get the deterministic display color for one postal code.
///
/// Args:
///     postal_code: Postal code of the zone
///
/// Returns:
///     Hex color from the default palette
#[pyfunction]
fn get_zone_color(postal_code: String) -> PyResult<String> {
    let assigner = services::ZoneColorAssigner::new();
    Ok(assigner.color_for(&postal_code).to_string())
}

/// Get the zone map dataset for one office.
///
/// Args:
///     office_id: Delivery office identifier
///     palette: Optional color list; defaults to the built-in palette
///
/// Returns:
///     ZoneMapData with one colored row per zone
#[pyfunction]
#[pyo3(signature = (office_id, palette=None))]
fn get_zone_map_data(
    office_id: String,
    palette: Option<Vec<String>>,
) -> PyResult<api::ZoneMapData> {
    if let Some(ref colors) = palette {
        if colors.is_empty() {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "palette must contain at least one color",
            ));
        }
    }

    let runtime = new_runtime()?;
    let bundle = runtime
        .block_on(services::get_zone_map_data(&office_id, palette))
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e))?;
    Ok((&bundle).into())
}
