//! Type conversions between internal models and API DTOs.
//!
//! This module provides conversion traits to transform internal Rust types
//! (which use chrono types and nested domain structures) into
//! Python-compatible DTOs (which use only primitives like f64 and String).
//!
//! ## Conversion Strategy
//!
//! - `From<&InternalType> for ApiType`: Infallible conversion to API types
//! - `NaiveDateTime` → `%Y-%m-%dT%H:%M:%S` strings at the boundary
//! - `GeoPoint` → flat latitude/longitude f64 pairs
//! - Option types preserved where semantically equivalent

use chrono::NaiveDateTime;

use crate::api::types as api;
use crate::db::models;

/// Boundary timestamp layout handed to Python.
const API_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format an event time for the API boundary.
pub fn format_event_time(time: &NaiveDateTime) -> String {
    time.format(API_TIME_FORMAT).to_string()
}

// =========================================================
// Delivery Event Types - Internal to API
// =========================================================

impl From<&models::ClassifiedEvent> for api::DeliveryEventRow {
    fn from(classified: &models::ClassifiedEvent) -> Self {
        let event = &classified.event;
        api::DeliveryEventRow {
            tracking_id: event.tracking_id.clone(),
            product_code: event.product_code.clone(),
            shipment_type: event.shipment_type.clone(),
            raw_status: event.raw_status.clone(),
            courier_id: event.courier_id.clone(),
            office_id: event.office_id.clone(),
            recipient_name: event.recipient_name.clone(),
            recipient_address: event.recipient_address.clone(),
            note: event.note.clone(),
            event_time: event.event_time.as_ref().map(format_event_time),
            latitude: event.location.map(|p| p.latitude),
            longitude: event.location.map(|p| p.longitude),
            outcome: classified.outcome.as_str().to_string(),
            marker_color: classified.outcome.marker_color().to_string(),
        }
    }
}

// =========================================================
// Resume Types - Internal to API
// =========================================================

impl From<&models::ProductResume> for api::ProductResumeEntry {
    fn from(product: &models::ProductResume) -> Self {
        api::ProductResumeEntry {
            product_code: product.product_code.clone(),
            total: product.total,
            delivered: product.delivered,
            failed: product.failed,
            other: product.other,
            pct_delivered: product.pct_delivered,
            pct_failed: product.pct_failed,
            pct_other: product.pct_other,
        }
    }
}

impl From<&models::DeliveryResume> for api::DeliveryResumeData {
    fn from(resume: &models::DeliveryResume) -> Self {
        api::DeliveryResumeData {
            total: resume.total,
            delivered: resume.delivered,
            failed: resume.failed,
            other: resume.other,
            pct_delivered: resume.pct_delivered,
            pct_failed: resume.pct_failed,
            pct_other: resume.pct_other,
            products: resume.products.iter().map(|p| p.into()).collect(),
        }
    }
}

// =========================================================
// Time Effectiveness Types - Internal to API
// =========================================================

impl From<&models::EventGap> for api::EventGapEntry {
    fn from(gap: &models::EventGap) -> Self {
        api::EventGapEntry {
            tracking_id: gap.tracking_id.clone(),
            event_time: format_event_time(&gap.event_time),
            gap_minutes: gap.gap_minutes,
        }
    }
}

impl From<&models::TimeEffectivenessReport> for api::TimeEffectivenessData {
    fn from(report: &models::TimeEffectivenessReport) -> Self {
        api::TimeEffectivenessData {
            start_time: report.start_time.as_ref().map(format_event_time),
            end_time: report.end_time.as_ref().map(format_event_time),
            duration_minutes: report.duration_minutes,
            average_minutes: report.average_minutes,
            analyzed_count: report.analyzed_count,
            gaps: report.gaps.iter().map(|g| g.into()).collect(),
        }
    }
}

// =========================================================
// History Bundle Types - Internal to API
// =========================================================

impl From<&models::DeliveryHistoryBundle> for api::DeliveryHistoryData {
    fn from(bundle: &models::DeliveryHistoryBundle) -> Self {
        api::DeliveryHistoryData {
            events: bundle.events.iter().map(|e| e.into()).collect(),
            resume: (&bundle.resume).into(),
            time_effectiveness: (&bundle.time_effectiveness).into(),
            center_latitude: bundle.map_center.map(|c| c.latitude),
            center_longitude: bundle.map_center.map(|c| c.longitude),
            total_count: bundle.total_count,
            delivered_count: bundle.delivered_count,
            failed_count: bundle.failed_count,
            other_count: bundle.other_count,
        }
    }
}

// =========================================================
// Courier Types - Internal to API
// =========================================================

impl From<&models::Courier> for api::CourierInfo {
    fn from(courier: &models::Courier) -> Self {
        api::CourierInfo {
            courier_id: courier.courier_id.clone(),
            name: courier.name.clone(),
            office_id: courier.office_id.clone(),
            label: courier.display_label(),
        }
    }
}

// =========================================================
// Zone Map Types - Internal to API
// =========================================================

impl From<&models::ZoneColorRow> for api::ZoneRow {
    fn from(row: &models::ZoneColorRow) -> Self {
        api::ZoneRow {
            postal_code: row.zone.postal_code.clone(),
            district: row.zone.district.clone(),
            subdistrict: row.zone.subdistrict.clone(),
            area_km2: row.zone.area_km2,
            geometry_geojson: row.zone.geometry_geojson.clone(),
            office_id: row.zone.office_id.clone(),
            color: row.color.clone(),
        }
    }
}

impl From<&models::ZoneMapBundle> for api::ZoneMapData {
    fn from(bundle: &models::ZoneMapBundle) -> Self {
        api::ZoneMapData {
            zones: bundle.rows.iter().map(|r| r.into()).collect(),
            total_count: bundle.total_count,
            palette: bundle.palette.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{ClassifiedEvent, DeliveryEvent, DeliveryOutcome, GeoPoint};
    use chrono::NaiveDate;

    #[test]
    fn event_row_carries_outcome_and_flat_position() {
        let event = DeliveryEvent {
            tracking_id: "CN001".to_string(),
            product_code: Some("PKH".to_string()),
            shipment_type: None,
            raw_status: Some("FAILED_ADDRESS".to_string()),
            courier_id: "P001".to_string(),
            office_id: "40115".to_string(),
            recipient_name: None,
            recipient_address: None,
            note: None,
            event_time: NaiveDate::from_ymd_opt(2024, 3, 1)
                .and_then(|d| d.and_hms_opt(8, 20, 0)),
            location: Some(GeoPoint::new(-6.9, 107.6)),
        };
        let classified = ClassifiedEvent {
            event,
            outcome: DeliveryOutcome::Failed,
        };

        let row = api::DeliveryEventRow::from(&classified);
        assert_eq!(row.outcome, "FAILED");
        assert_eq!(row.marker_color, "red");
        assert_eq!(row.event_time.as_deref(), Some("2024-03-01T08:20:00"));
        assert_eq!(row.latitude, Some(-6.9));
        assert_eq!(row.longitude, Some(107.6));
    }

    #[test]
    fn courier_info_builds_picker_label() {
        let courier = models::Courier::new("P017", "Budi Santoso", "40115");
        let info = api::CourierInfo::from(&courier);
        assert_eq!(info.label, "P017 - Budi Santoso");
    }
}
