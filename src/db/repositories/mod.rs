//! Repository implementations module.
//!
//! This module contains the shipped implementations of the repository
//! traits:
//! - `local`: In-memory implementation for unit testing, demos and
//!   dashboard development
//!
//! The production PostGIS store stays on the dashboard side; a backend for
//! it would slot in here behind its own feature gate.

#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
