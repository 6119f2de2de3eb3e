//! Domain models for the records registries.
//!
//! This module contains the typed records parsed from the backing files, the
//! query model used to filter them, and the on-disk configuration.

/// Record kinds, typed attribute values and lenient numeric conversion.
pub mod record;
pub use record::{Field, Id, Record, RecordKind, parse_id};

mod user;
pub use user::UserRecord;

mod group;
pub use group::GroupRecord;

/// Attribute filters and the shared matching rules.
pub mod query;
pub use query::{FilterValue, Query};

mod config;
pub use config::{Config, Settings};
