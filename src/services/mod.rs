//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between the repository
//! and the Python bindings. Services orchestrate repository calls and
//! implement the analytics: status classification, resume aggregation,
//! time effectiveness and zone coloring.

pub mod history;
pub mod resume;
pub mod status;
pub mod time_effectiveness;
pub mod zone_colors;

pub use history::{compute_delivery_history, get_delivery_history_data};
pub use resume::compute_delivery_resume;
pub use status::{classify_event, classify_status};
pub use time_effectiveness::compute_time_effectiveness;
pub use zone_colors::{compute_zone_map_data, get_zone_map_data, ZoneColorAssigner};
