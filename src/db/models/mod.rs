//! Domain models for delivery-history analytics.
//!
//! This module is organized into several submodules:
//!
//! - [`event`]: Core event types (DeliveryEvent, GeoPoint, DeliveryOutcome)
//! - [`courier`]: Courier identity (Courier)
//! - [`zone`]: Delivery zones with opaque geometry (DeliveryZone)
//! - [`analytics`]: Report types (DeliveryResume, TimeEffectivenessReport,
//!   DeliveryHistoryBundle, ZoneMapBundle)

pub mod analytics;
pub mod courier;
pub mod event;
pub mod zone;

// Re-export all public types for convenience
pub use analytics::{
    ClassifiedEvent, DeliveryHistoryBundle, DeliveryResume, EventGap, ProductResume,
    TimeEffectivenessReport, ZoneColorRow, ZoneMapBundle,
};
pub use courier::Courier;
pub use event::{DeliveryEvent, DeliveryOutcome, GeoPoint};
pub use zone::DeliveryZone;
