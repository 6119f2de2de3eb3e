use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric identifier column (uid or gid).
///
/// `None` stands in for a column that did not start with a number. It never
/// compares equal to anything, and serializes as `null`.
pub type Id = Option<i64>;

/// Converts the leading integer of a column into an [`Id`].
///
/// Leading whitespace is skipped, an optional sign is accepted, and the
/// longest run of ASCII digits that follows is used. Trailing garbage is
/// ignored, so `"1000abc"` yields `Some(1000)`. A column with no leading digits
/// (or one that overflows) yields `None`; this never fails.
#[must_use]
pub fn parse_id(raw: &str) -> Id {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let value: i64 = unsigned[..end].parse().ok()?;

    Some(if negative { -value } else { value })
}

/// The kind of records file a registry reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// The user registry, `/etc/passwd` style.
    Passwd,
    /// The group registry, `/etc/group` style.
    Group,
}

impl RecordKind {
    /// The lowercase name used in messages, e.g. `passwd`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passwd => "passwd",
            Self::Group => "group",
        }
    }

    /// The number of columns every line of this kind must split into.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Passwd => 7,
            Self::Group => 4,
        }
    }

    /// The system location of the file.
    #[must_use]
    pub const fn default_path(self) -> &'static str {
        match self {
            Self::Passwd => "/etc/passwd",
            Self::Group => "/etc/group",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed view of one record attribute, typed for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    /// A free-text column.
    Text(&'a str),
    /// A numeric identifier column.
    Id(Id),
    /// A list-valued column, matched by containment.
    List(&'a [String]),
}

/// One line of a records file, parsed into a typed value.
pub trait Record: Sized {
    /// The file this record type is read from.
    const KIND: RecordKind;

    /// Builds a record from the columns of a single line.
    ///
    /// Returns `None` if the number of columns is wrong for this kind.
    fn from_columns(columns: &[&str]) -> Option<Self>;

    /// Looks up a named attribute.
    ///
    /// Returns `None` for names this record type does not have.
    fn attribute(&self, name: &str) -> Option<Field<'_>>;
}
