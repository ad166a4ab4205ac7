//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing, demos and dashboard development. All data is
//! stored in memory using Vec and HashMap structures, providing fast,
//! deterministic, and isolated execution.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::db::models::{Courier, DeliveryEvent, DeliveryZone};
use crate::db::repository::*;

/// In-memory local repository.
///
/// This implementation stores all data in memory, making it ideal for unit
/// tests and local development that need isolation and speed.
///
/// # Example
/// ```
/// use antaran_rust::db::repositories::LocalRepository;
/// use antaran_rust::db::repository::DeliveryEventRepository;
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// rt.block_on(async {
///     let repo = LocalRepository::new();
///     assert!(repo.health_check().await.unwrap());
/// });
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    events: Vec<DeliveryEvent>,

    // Keyed by (office_id, courier_id) so re-seeding replaces records
    couriers: HashMap<(String, String), Courier>,

    zones: Vec<DeliveryZone>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            couriers: HashMap::new(),
            zones: Vec::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Add a single event to the repository.
    ///
    /// This is a helper method for setting up data without going through
    /// the async trait.
    pub fn store_event_impl(&self, event: DeliveryEvent) {
        let mut data = self.data.write().unwrap();
        data.events.push(event);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository, keeping the health flag.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of events stored.
    pub fn event_count(&self) -> usize {
        self.data.read().unwrap().events.len()
    }

    /// Get the number of couriers stored.
    pub fn courier_count(&self) -> usize {
        self.data.read().unwrap().couriers.len()
    }

    /// Get the number of zones stored.
    pub fn zone_count(&self) -> usize {
        self.data.read().unwrap().zones.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::ConnectionError(
                "Repository is not healthy".to_string(),
            ));
        }
        Ok(())
    }

    /// Helper to reject events with missing identity fields.
    fn validate_event(event: &DeliveryEvent) -> RepositoryResult<()> {
        if event.tracking_id.trim().is_empty() {
            return Err(RepositoryError::ValidationError(
                "Event is missing its tracking id".to_string(),
            ));
        }
        if event.courier_id.trim().is_empty() || event.office_id.trim().is_empty() {
            return Err(RepositoryError::ValidationError(format!(
                "Event {} is missing its courier or office id",
                event.tracking_id
            )));
        }
        Ok(())
    }

    /// Whether an event belongs to the given courier, office and day.
    ///
    /// Events without a timestamp match any date; the source system emits
    /// them occasionally and the analytics tolerate them.
    fn event_matches(
        event: &DeliveryEvent,
        courier_id: &str,
        office_id: &str,
        date: NaiveDate,
    ) -> bool {
        event.courier_id == courier_id
            && event.office_id == office_id
            && event.event_time.map(|t| t.date() == date).unwrap_or(true)
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryEventRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn fetch_delivery_events(
        &self,
        courier_id: &str,
        office_id: &str,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<DeliveryEvent>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        Ok(data
            .events
            .iter()
            .filter(|e| Self::event_matches(e, courier_id, office_id, date))
            .cloned()
            .collect())
    }

    async fn store_delivery_events(&self, events: &[DeliveryEvent]) -> RepositoryResult<usize> {
        self.check_health()?;

        for event in events {
            Self::validate_event(event)?;
        }

        let mut data = self.data.write().unwrap();
        data.events.extend_from_slice(events);
        Ok(events.len())
    }
}

// ==================== Courier Repository ====================

#[async_trait]
impl CourierRepository for LocalRepository {
    async fn list_couriers(&self, office_id: &str) -> RepositoryResult<Vec<Courier>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        let mut couriers: Vec<Courier> = data
            .couriers
            .values()
            .filter(|c| c.office_id == office_id)
            .cloned()
            .collect();

        couriers.sort_by(|a, b| a.courier_id.cmp(&b.courier_id));
        Ok(couriers)
    }

    async fn get_courier(&self, courier_id: &str, office_id: &str) -> RepositoryResult<Courier> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        data.couriers
            .get(&(office_id.to_string(), courier_id.to_string()))
            .cloned()
            .ok_or_else(|| {
                RepositoryError::NotFound(format!(
                    "Courier {} not found for office {}",
                    courier_id, office_id
                ))
            })
    }

    async fn store_courier(&self, courier: &Courier) -> RepositoryResult<()> {
        self.check_health()?;

        if courier.courier_id.trim().is_empty() || courier.office_id.trim().is_empty() {
            return Err(RepositoryError::ValidationError(
                "Courier is missing its courier or office id".to_string(),
            ));
        }

        let mut data = self.data.write().unwrap();
        data.couriers.insert(
            (courier.office_id.clone(), courier.courier_id.clone()),
            courier.clone(),
        );
        Ok(())
    }
}

// ==================== Zone Repository ====================

#[async_trait]
impl ZoneRepository for LocalRepository {
    async fn fetch_zones(&self, office_id: &str) -> RepositoryResult<Vec<DeliveryZone>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        let mut zones: Vec<DeliveryZone> = data
            .zones
            .iter()
            .filter(|z| z.office_id == office_id)
            .cloned()
            .collect();

        zones.sort_by(|a, b| a.postal_code.cmp(&b.postal_code));
        Ok(zones)
    }

    async fn store_zone(&self, zone: &DeliveryZone) -> RepositoryResult<()> {
        self.check_health()?;

        if zone.postal_code.trim().is_empty() || zone.office_id.trim().is_empty() {
            return Err(RepositoryError::ValidationError(
                "Zone is missing its postal code or office id".to_string(),
            ));
        }

        let mut data = self.data.write().unwrap();
        data.zones.push(zone.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn when(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn event(tracking: &str, courier: &str, time: Option<&str>) -> DeliveryEvent {
        DeliveryEvent {
            tracking_id: tracking.to_string(),
            product_code: Some("PKH".to_string()),
            shipment_type: None,
            raw_status: Some("DELIVERED".to_string()),
            courier_id: courier.to_string(),
            office_id: "40115".to_string(),
            recipient_name: None,
            recipient_address: None,
            note: None,
            event_time: time.map(when),
            location: None,
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let repo = LocalRepository::new();
        assert!(repo.health_check().await.unwrap());

        repo.set_healthy(false);
        assert!(!repo.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_unhealthy_repository_rejects_queries() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        let result = repo
            .fetch_delivery_events("P001", "40115", day("2024-03-01"))
            .await;
        assert!(matches!(result, Err(RepositoryError::ConnectionError(_))));
    }

    #[tokio::test]
    async fn test_store_and_fetch_events_by_day() {
        let repo = LocalRepository::new();

        let events = vec![
            event("CN001", "P001", Some("2024-03-01 08:00:00")),
            event("CN002", "P001", Some("2024-03-02 09:00:00")),
            event("CN003", "P002", Some("2024-03-01 10:00:00")),
        ];
        let stored = repo.store_delivery_events(&events).await.unwrap();
        assert_eq!(stored, 3);
        assert_eq!(repo.event_count(), 3);

        let fetched = repo
            .fetch_delivery_events("P001", "40115", day("2024-03-01"))
            .await
            .unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].tracking_id, "CN001");
    }

    #[tokio::test]
    async fn test_untimestamped_events_match_any_day() {
        let repo = LocalRepository::new();
        repo.store_event_impl(event("CN010", "P001", None));

        let fetched = repo
            .fetch_delivery_events("P001", "40115", day("2024-07-15"))
            .await
            .unwrap();
        assert_eq!(fetched.len(), 1);
    }

    #[tokio::test]
    async fn test_store_rejects_missing_identity() {
        let repo = LocalRepository::new();

        let bad = vec![event("", "P001", None)];
        let result = repo.store_delivery_events(&bad).await;
        assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
        assert_eq!(repo.event_count(), 0);
    }

    #[tokio::test]
    async fn test_courier_listing_is_distinct_and_sorted() {
        let repo = LocalRepository::new();

        for (id, name) in [("P002", "Siti"), ("P001", "Budi"), ("P002", "Siti R.")] {
            repo.store_courier(&Courier::new(id, name, "40115"))
                .await
                .unwrap();
        }
        repo.store_courier(&Courier::new("P009", "Agus", "40121"))
            .await
            .unwrap();

        let couriers = repo.list_couriers("40115").await.unwrap();
        let ids: Vec<&str> = couriers.iter().map(|c| c.courier_id.as_str()).collect();
        assert_eq!(ids, vec!["P001", "P002"]);
        // Re-seeding replaced the earlier P002 record
        assert_eq!(couriers[1].name, "Siti R.");
    }

    #[tokio::test]
    async fn test_get_courier_not_found() {
        let repo = LocalRepository::new();

        let result = repo.get_courier("P404", "40115").await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_zones_sorted_with_duplicates_kept() {
        let repo = LocalRepository::new();

        for postal in ["40293", "40115", "40115"] {
            repo.store_zone(&DeliveryZone {
                postal_code: postal.to_string(),
                district: "Bandung".to_string(),
                subdistrict: "Arcamanik".to_string(),
                area_km2: Some(5.4),
                geometry_geojson: None,
                office_id: "40115".to_string(),
            })
            .await
            .unwrap();
        }

        let zones = repo.fetch_zones("40115").await.unwrap();
        let codes: Vec<&str> = zones.iter().map(|z| z.postal_code.as_str()).collect();
        assert_eq!(codes, vec!["40115", "40115", "40293"]);
    }

    #[tokio::test]
    async fn test_clear_keeps_health() {
        let repo = LocalRepository::new();
        repo.store_event_impl(event("CN001", "P001", None));
        repo.set_healthy(false);

        repo.clear();
        assert_eq!(repo.event_count(), 0);
        assert!(!repo.health_check().await.unwrap());
    }
}
