//! Delivery zone domain model.

/// An administrative delivery zone served by an office.
///
/// Zone geometry is carried as an opaque GeoJSON string for the frontend
/// map layer; this crate never parses or measures it. `area_km2` comes
/// precomputed from the source system for the same reason.
///
/// `postal_code` is the color/join key. Several zones may share one postal
/// code; rows are kept as-is and never deduplicated.
#[derive(Debug, Clone)]
pub struct DeliveryZone {
    pub postal_code: String,
    pub district: String,
    pub subdistrict: String,
    pub area_km2: Option<f64>,
    pub geometry_geojson: Option<String>,
    pub office_id: String,
}
