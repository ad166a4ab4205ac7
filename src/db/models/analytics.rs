//! Analytics report models.
//!
//! This module contains the immutable report types produced by the
//! analytics services:
//! - Resume types (DeliveryResume, ProductResume)
//! - Time effectiveness types (TimeEffectivenessReport, EventGap)
//! - History bundle types (ClassifiedEvent, DeliveryHistoryBundle)
//! - Zone map types (ZoneColorRow, ZoneMapBundle)
//!
//! Every report is built fresh from one materialized event set and never
//! mutated afterwards.

use chrono::NaiveDateTime;

use super::{DeliveryEvent, DeliveryOutcome, DeliveryZone, GeoPoint};

// =========================================================
// Resume Types
// =========================================================

/// Outcome counts and percentages for one product group.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductResume {
    /// Product code; empty string groups events without one.
    pub product_code: String,
    pub total: usize,
    pub delivered: usize,
    pub failed: usize,
    pub other: usize,
    pub pct_delivered: f64,
    pub pct_failed: f64,
    pub pct_other: f64,
}

/// Complete delivery resume: overall counts plus per-product breakdown.
///
/// Percentages always divide by the full group total (including `other`)
/// and are exactly `0.0` when the total is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryResume {
    pub total: usize,
    pub delivered: usize,
    pub failed: usize,
    pub other: usize,
    pub pct_delivered: f64,
    pub pct_failed: f64,
    pub pct_other: f64,
    /// Per-product entries sorted ascending by product code.
    pub products: Vec<ProductResume>,
}

impl DeliveryResume {
    /// Resume for an empty event set: all counts and percentages zero.
    pub fn empty() -> Self {
        Self {
            total: 0,
            delivered: 0,
            failed: 0,
            other: 0,
            pct_delivered: 0.0,
            pct_failed: 0.0,
            pct_other: 0.0,
            products: Vec::new(),
        }
    }
}

// =========================================================
// Time Effectiveness Types
// =========================================================

/// Gap between one event and its predecessor in the time-ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct EventGap {
    pub tracking_id: String,
    pub event_time: NaiveDateTime,
    /// Minutes since the previous event; `0.0` for the first event.
    pub gap_minutes: f64,
}

/// Working-time statistics over the timestamped events of one result set.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEffectivenessReport {
    /// Earliest event time, `None` when no event carries a timestamp.
    pub start_time: Option<NaiveDateTime>,
    /// Latest event time, `None` when no event carries a timestamp.
    pub end_time: Option<NaiveDateTime>,
    pub duration_minutes: f64,
    /// Mean minutes per event: duration divided by `analyzed_count`.
    pub average_minutes: f64,
    /// Number of events that entered the analysis.
    pub analyzed_count: usize,
    /// Per-event gaps ordered by event time ascending.
    pub gaps: Vec<EventGap>,
}

impl TimeEffectivenessReport {
    /// Report for a set without any timestamped event: everything zeroed.
    pub fn empty() -> Self {
        Self {
            start_time: None,
            end_time: None,
            duration_minutes: 0.0,
            average_minutes: 0.0,
            analyzed_count: 0,
            gaps: Vec::new(),
        }
    }
}

// =========================================================
// History Bundle Types
// =========================================================

/// A delivery event paired with its canonical outcome.
#[derive(Debug, Clone)]
pub struct ClassifiedEvent {
    pub event: DeliveryEvent,
    pub outcome: DeliveryOutcome,
}

/// Complete data bundle for the delivery-history page.
///
/// Contains everything the frontend needs: classified event rows in input
/// order, the resume, the time report and the map center.
#[derive(Debug, Clone)]
pub struct DeliveryHistoryBundle {
    pub events: Vec<ClassifiedEvent>,
    pub resume: DeliveryResume,
    pub time_effectiveness: TimeEffectivenessReport,
    /// Mean position of located events, `None` when none carry one.
    pub map_center: Option<GeoPoint>,
    pub total_count: usize,
    pub delivered_count: usize,
    pub failed_count: usize,
    pub other_count: usize,
}

// =========================================================
// Zone Map Types
// =========================================================

/// A delivery zone joined with its assigned display color.
#[derive(Debug, Clone)]
pub struct ZoneColorRow {
    pub zone: DeliveryZone,
    pub color: String,
}

/// Complete data bundle for the zone map page.
#[derive(Debug, Clone)]
pub struct ZoneMapBundle {
    pub rows: Vec<ZoneColorRow>,
    pub total_count: usize,
    /// Palette the colors were drawn from.
    pub palette: Vec<String>,
}
