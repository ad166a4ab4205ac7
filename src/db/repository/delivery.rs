//! Delivery event repository trait.
//!
//! This trait defines the fundamental store/fetch operations for delivery
//! events. Courier and zone lookups live in separate traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::db::models::DeliveryEvent;

/// Repository trait for delivery event storage and retrieval.
///
/// Analytics never touch the store directly: a query materializes the full
/// event set first and the services operate on the returned slice.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait DeliveryEventRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the backing store is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if the store is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Event Operations ====================

    /// Fetch all delivery events of one courier, office and working day.
    ///
    /// # Arguments
    /// * `courier_id` - Courier whose events to fetch
    /// * `office_id` - Delivery office the courier works from
    /// * `date` - Local calendar date of the events
    ///
    /// # Returns
    /// * `Ok(Vec<DeliveryEvent>)` - Fully materialized event set; empty when
    ///   the courier recorded nothing that day (never an error)
    /// * `Err(RepositoryError)` - If the operation fails
    ///
    /// Events without a timestamp match any `date`; whether they exist at
    /// all is a source-system quirk the analytics tolerate.
    async fn fetch_delivery_events(
        &self,
        courier_id: &str,
        office_id: &str,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<DeliveryEvent>>;

    /// Store a batch of delivery events.
    ///
    /// # Arguments
    /// * `events` - Events to store; an empty slice is a no-op
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of events stored
    /// * `Err(RepositoryError::ValidationError)` - If an event is missing
    ///   its tracking, courier or office id
    async fn store_delivery_events(&self, events: &[DeliveryEvent]) -> RepositoryResult<usize>;
}
