use std::io;

use crate::domain::RecordKind;

/// Errors that can occur when loading a records file.
///
/// The messages are fixed strings that clients depend on; the details are
/// carried in the fields and the error source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be opened or read.
    #[error("Something went wrong reading the {kind} file")]
    Read {
        /// The file that failed.
        kind: RecordKind,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A non-empty line did not split into the expected number of columns.
    #[error("There was an issue parsing the {kind} file")]
    Parse {
        /// The file that failed.
        kind: RecordKind,
        /// The 1-based position of the offending line.
        line: usize,
        /// The number of columns the line actually had.
        columns: usize,
    },
}

impl Error {
    /// The kind of file the error relates to.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Read { kind, .. } | Self::Parse { kind, .. } => *kind,
        }
    }
}
