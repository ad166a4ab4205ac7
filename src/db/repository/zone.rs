//! Delivery zone repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::db::models::DeliveryZone;

/// Repository trait for delivery zone queries.
///
/// Zone geometry is an opaque pass-through; implementations store and
/// return it untouched.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ZoneRepository: Send + Sync {
    /// Fetch the delivery zones of one office.
    ///
    /// # Arguments
    /// * `office_id` - Office whose zones to fetch
    ///
    /// # Returns
    /// * `Ok(Vec<DeliveryZone>)` - Zones sorted by postal code; duplicates
    ///   per postal code are kept
    /// * `Err(RepositoryError)` - If the operation fails
    async fn fetch_zones(&self, office_id: &str) -> RepositoryResult<Vec<DeliveryZone>>;

    /// Store a delivery zone record.
    ///
    /// # Arguments
    /// * `zone` - Zone to store; rows are appended, never merged
    async fn store_zone(&self, zone: &DeliveryZone) -> RepositoryResult<()>;
}
