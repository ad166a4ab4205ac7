//! Data access module for delivery history storage.
//!
//! This module provides abstractions for the backing store via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! The module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (Python bindings via api/)           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (crate::services) - Analytics            │
//! │  - Status classification                                │
//! │  - Resume and time-effectiveness reports                │
//! │  - Zone color assignment                                │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                │
//! ┌───▼──────────────────┐   ┌─────────▼───────────────┐
//! │ Local Repository     │   │  External store         │
//! │ (in-memory)          │   │  (dashboard-owned SQL)  │
//! └──────────────────────┘   └─────────────────────────┘
//! ```
//!
//! The dashboard keeps its own SQL access to the production store and hands
//! query results to this crate as materialized rows; the repository layer
//! here exists so tests, demos and dashboard development can run fully
//! in-process against the same trait surface.
//!
//! # Module Organization
//! - `models`: Domain and report types
//! - `repository`: Trait definitions for data access
//! - `repositories::local`: In-memory implementation
//! - `factory`: Factory for creating repository instances
//! - `repo_config`: TOML configuration for backend selection

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable a repository backend feature (local-repo).");

pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use repo_config::RepositoryConfig;

// Repository trait and implementations
pub use factory::{RepositoryFactory, RepositoryType};
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
pub use repository::{
    CourierRepository, DeliveryEventRepository, FullRepository, RepositoryError, RepositoryResult,
    ZoneRepository,
};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn FullRepository>> = OnceLock::new();

#[cfg(feature = "local-repo")]
fn create_selected_repository() -> RepositoryResult<Arc<dyn FullRepository>> {
    Ok(RepositoryFactory::create_local())
}

/// Initialize the global repository singleton for the selected backend.
#[cfg(feature = "local-repo")]
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_selected_repository().map_err(|e| anyhow::Error::msg(e.to_string()))?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn FullRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
