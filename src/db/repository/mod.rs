//! Repository trait definitions for delivery data access.
//!
//! This module provides a collection of focused repository traits that
//! abstract the backing store. By splitting responsibilities across multiple
//! traits, implementations can be more focused and testable.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`delivery`]: Delivery event storage and per-day retrieval
//! - [`courier`]: Courier listings and lookups
//! - [`zone`]: Delivery zone queries
//!
//! # Trait Composition
//!
//! A complete repository implementation typically implements all traits:
//!
//! ```ignore
//! impl DeliveryEventRepository for MyRepo { ... }
//! impl CourierRepository for MyRepo { ... }
//! impl ZoneRepository for MyRepo { ... }
//! ```
//!
//! # Convenience Trait Bound
//!
//! For functions that need all repository capabilities, use the
//! [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository>(repo: &R) -> Result<()> {
//!     let couriers = repo.list_couriers("40115").await?;
//!     let events = repo.fetch_delivery_events("P001", "40115", date).await?;
//!     Ok(())
//! }
//! ```

pub mod courier;
pub mod delivery;
pub mod error;
pub mod zone;

// Re-export error types
pub use error::{RepositoryError, RepositoryResult};

// Re-export all traits
pub use courier::CourierRepository;
pub use delivery::DeliveryEventRepository;
pub use zone::ZoneRepository;

/// Composite trait bound for a complete repository implementation.
///
/// This trait is automatically implemented for any type that implements
/// all three repository traits. Use this as a convenient bound when you
/// need access to all repository operations.
///
/// # Example
///
/// ```ignore
/// async fn day_overview<R: FullRepository>(
///     repo: &R,
///     office_id: &str,
///     date: NaiveDate,
/// ) -> RepositoryResult<usize> {
///     let mut total = 0;
///     for courier in repo.list_couriers(office_id).await? {
///         total += repo
///             .fetch_delivery_events(&courier.courier_id, office_id, date)
///             .await?
///             .len();
///     }
///     Ok(total)
/// }
/// ```
pub trait FullRepository: DeliveryEventRepository + CourierRepository + ZoneRepository {}

// Blanket implementation: any type implementing all three traits automatically implements FullRepository
impl<T> FullRepository for T where T: DeliveryEventRepository + CourierRepository + ZoneRepository {}
