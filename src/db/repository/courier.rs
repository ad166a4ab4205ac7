//! Courier repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::db::models::Courier;

/// Repository trait for courier lookups.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CourierRepository: Send + Sync {
    /// List the couriers of one delivery office.
    ///
    /// # Arguments
    /// * `office_id` - Office whose couriers to list
    ///
    /// # Returns
    /// * `Ok(Vec<Courier>)` - Distinct couriers sorted by courier id;
    ///   empty when the office has none
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_couriers(&self, office_id: &str) -> RepositoryResult<Vec<Courier>>;

    /// Get a single courier by id within an office.
    ///
    /// # Arguments
    /// * `courier_id` - The courier id
    /// * `office_id` - Office the courier must belong to
    ///
    /// # Returns
    /// * `Ok(Courier)` - The courier record
    /// * `Err(RepositoryError::NotFound)` - If no such courier exists
    async fn get_courier(&self, courier_id: &str, office_id: &str) -> RepositoryResult<Courier>;

    /// Store a courier record.
    ///
    /// # Arguments
    /// * `courier` - Courier to store; an existing record with the same
    ///   courier and office id is replaced
    async fn store_courier(&self, courier: &Courier) -> RepositoryResult<()>;
}
