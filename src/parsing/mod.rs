//! Parsers for delivery data payloads.
//!
//! This module provides parsers for the JSON payloads exchanged with the
//! dashboard: delivery event records, courier records and delivery zone
//! records, all in the `to_json(orient="records")` row shape with the
//! source system's column names.
//!
//! # Parsers
//!
//! - [`events_parser`]: Parse delivery event records
//! - [`couriers_parser`]: Parse courier records
//! - [`zones_parser`]: Parse delivery zone records
//!
//! # Example
//!
//! ```no_run
//! use antaran_rust::parsing::events_parser::parse_delivery_events;
//! use std::path::Path;
//!
//! let events = parse_delivery_events(Path::new("events.json"))
//!     .expect("Failed to parse delivery events");
//! ```

pub mod couriers_parser;
pub mod events_parser;
pub mod zones_parser;

#[cfg(test)]
mod couriers_parser_tests;

pub use couriers_parser::{parse_couriers, parse_couriers_str};
pub use events_parser::{parse_delivery_events, parse_delivery_events_str};
pub use zones_parser::{parse_zones, parse_zones_str};
