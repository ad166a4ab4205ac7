//! Core delivery domain models.
//!
//! This module contains the primary domain types for delivery-history
//! analytics:
//! - DeliveryEvent: one attempt/status record for a shipment
//! - GeoPoint: WGS84 position of an event
//! - DeliveryOutcome: canonical classification of a raw status

use chrono::NaiveDateTime;

/// Geographic position in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Canonical delivery outcome derived from a free-text status.
///
/// Source systems record statuses as uppercase tokens with suffixes
/// (`FAILED_ADDRESS_NOT_FOUND`, `DELIVERED`, `WITH_COURIER`, ...). Reports
/// only distinguish three outcomes; everything that is neither a successful
/// delivery nor an explicit failure counts as [`DeliveryOutcome::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryOutcome {
    Delivered,
    Failed,
    Other,
}

impl DeliveryOutcome {
    /// Canonical uppercase token for this outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use antaran_rust::db::models::DeliveryOutcome;
    ///
    /// assert_eq!(DeliveryOutcome::Delivered.as_str(), "DELIVERED");
    /// assert_eq!(DeliveryOutcome::Other.as_str(), "OTHER");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOutcome::Delivered => "DELIVERED",
            DeliveryOutcome::Failed => "FAILED",
            DeliveryOutcome::Other => "OTHER",
        }
    }

    /// Map marker color hint used by the dashboard.
    ///
    /// Failed attempts render red, successful deliveries green and anything
    /// in transit orange. Display hint only; no rendering happens here.
    ///
    /// # Examples
    ///
    /// ```
    /// use antaran_rust::db::models::DeliveryOutcome;
    ///
    /// assert_eq!(DeliveryOutcome::Failed.marker_color(), "red");
    /// ```
    pub fn marker_color(&self) -> &'static str {
        match self {
            DeliveryOutcome::Delivered => "green",
            DeliveryOutcome::Failed => "red",
            DeliveryOutcome::Other => "orange",
        }
    }
}

/// One delivery event as recorded by the tracking system.
///
/// # Fields
///
/// * `tracking_id` - Shipment tracking number (connote). Not unique within
///   a result set: redelivery attempts repeat it.
/// * `product_code` - Postal product of the shipment, when recorded
/// * `shipment_type` - Shipment category, when recorded
/// * `raw_status` - Free-text status from the source system
/// * `courier_id` - Courier who handled the attempt
/// * `office_id` - Delivery office the courier works from
/// * `recipient_name` - Addressee name, when recorded
/// * `recipient_address` - Destination address, when recorded
/// * `note` - Free-text annotation entered by the courier
/// * `event_time` - Local wall-clock time of the event. Events without a
///   timestamp still count in aggregates but are excluded from time
///   analysis.
/// * `location` - Position where the event was recorded, when geocoded
#[derive(Debug, Clone)]
pub struct DeliveryEvent {
    pub tracking_id: String,
    pub product_code: Option<String>,
    pub shipment_type: Option<String>,
    pub raw_status: Option<String>,
    pub courier_id: String,
    pub office_id: String,
    pub recipient_name: Option<String>,
    pub recipient_address: Option<String>,
    pub note: Option<String>,
    pub event_time: Option<NaiveDateTime>,
    pub location: Option<GeoPoint>,
}

impl DeliveryEvent {
    /// Returns `true` if this event carries a usable timestamp.
    pub fn has_event_time(&self) -> bool {
        self.event_time.is_some()
    }
}
