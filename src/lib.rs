//! Read-only access to passwd and group style records files
//!
//! Records are colon-delimited lines in a flat text file. Each registry
//! re-reads its file on every call, parses it into typed records and
//! optionally filters them with a [`Query`].

pub mod domain;
pub use domain::{Config, FilterValue, GroupRecord, Query, Record, RecordKind, UserRecord};

/// Registries that load and query the backing records files.
pub mod storage;
pub use storage::{Error, GroupRegistry, Registry, Settings, UserRegistry};

/// Framework independent HTTP handlers over the registries.
pub mod api;
pub use api::{ApiResponse, ErrorResponse};
