//! A registry loads and queries one records file.
//!
//! Nothing parsed is cached between calls: every load reads the whole file
//! into memory, then splits it into lines and columns using a snapshot of the
//! settings taken before any I/O, so a concurrent setter can never mix the
//! delimiters of one call with the path of another.

use std::{
    fmt,
    marker::PhantomData,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{
    domain::{Query, Record, RecordKind, Settings},
    storage::Error,
};

/// Loads and queries the records file for one record type.
///
/// The settings live behind a lock so a single registry can be shared by
/// reference (or in an `Arc`) and still be reconfigured at runtime.
pub struct Registry<R> {
    settings: RwLock<Settings>,
    record: PhantomData<fn() -> R>,
}

impl<R: Record> Registry<R> {
    /// Creates a registry with the system defaults for its record type.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::defaults_for(R::KIND))
    }

    /// Creates a registry with the given settings.
    #[must_use]
    pub const fn with_settings(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
            record: PhantomData,
        }
    }

    /// A snapshot of the current settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.read_settings().clone()
    }

    /// Replaces all settings at once.
    pub fn set_settings(&self, settings: Settings) {
        *self.write_settings() = settings;
    }

    /// The location of the records file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.read_settings().path.clone()
    }

    /// Sets the location of the records file.
    pub fn set_path(&self, path: impl Into<PathBuf>) {
        self.write_settings().path = path.into();
    }

    /// The string that separates records.
    #[must_use]
    pub fn line_delimiter(&self) -> String {
        self.read_settings().line_delimiter.clone()
    }

    /// Sets the string that separates records.
    ///
    /// No validation is applied; an empty delimiter makes every character a
    /// line of its own.
    pub fn set_line_delimiter(&self, delimiter: impl Into<String>) {
        self.write_settings().line_delimiter = delimiter.into();
    }

    /// The string that separates columns.
    #[must_use]
    pub fn column_delimiter(&self) -> String {
        self.read_settings().column_delimiter.clone()
    }

    /// Sets the string that separates columns.
    ///
    /// No validation is applied; an empty delimiter makes every character a
    /// column of its own.
    pub fn set_column_delimiter(&self, delimiter: impl Into<String>) {
        self.write_settings().column_delimiter = delimiter.into();
    }

    /// Reads and parses every record in the file.
    ///
    /// # Errors
    ///
    /// - [`Error::Read`] if the file cannot be opened or read
    /// - [`Error::Parse`] if any non-empty line has the wrong number of columns
    pub fn load(&self) -> Result<Vec<R>, Error> {
        let settings = self.settings();

        let content = read_file(R::KIND, &settings.path)?;
        let records = parse(
            &content,
            &settings.line_delimiter,
            &settings.column_delimiter,
        )
        .inspect_err(|e| tracing::warn!("Failed to parse {}: {e:?}", settings.path.display()))?;

        tracing::debug!(
            "Loaded {} {} records from {}",
            records.len(),
            R::KIND,
            settings.path.display()
        );
        Ok(records)
    }

    /// Reads and parses the file, keeping only the records that match.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`Registry::load`] does; filtering itself cannot
    /// fail.
    pub fn query(&self, query: &Query) -> Result<Vec<R>, Error> {
        let records = query.filter(self.load()?);
        tracing::debug!("{} {} records matched {query:?}", records.len(), R::KIND);
        Ok(records)
    }

    fn read_settings(&self) -> RwLockReadGuard<'_, Settings> {
        self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_settings(&self) -> RwLockWriteGuard<'_, Settings> {
        self.settings.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Record> Default for Registry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> fmt::Debug for Registry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &R::KIND)
            .field("settings", &*self.read_settings())
            .finish()
    }
}

/// Reads the whole file. Invalid UTF-8 is replaced rather than rejected.
fn read_file(kind: RecordKind, path: &Path) -> Result<String, Error> {
    let bytes = std::fs::read(path).map_err(|source| {
        tracing::warn!("Failed to read {kind} file {}: {source}", path.display());
        Error::Read { kind, source }
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parses the contents of a records file.
///
/// The content is split on `line_delimiter`; empty lines are skipped. Each
/// remaining line is split on `column_delimiter` and handed to
/// [`Record::from_columns`]. Lines are not trimmed.
///
/// # Errors
///
/// Returns [`Error::Parse`] for the first line with the wrong number of
/// columns. Earlier well-formed lines do not rescue the call.
pub fn parse<R: Record>(
    content: &str,
    line_delimiter: &str,
    column_delimiter: &str,
) -> Result<Vec<R>, Error> {
    split(content, line_delimiter)
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| {
            let columns = split(line, column_delimiter);
            R::from_columns(&columns).ok_or(Error::Parse {
                kind: R::KIND,
                line: index + 1,
                columns: columns.len(),
            })
        })
        .collect()
}

/// Splits `text` on `delimiter`. An empty delimiter splits into individual
/// characters, with no empty pieces at either end.
fn split<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        text.char_indices()
            .map(|(start, c)| &text[start..start + c.len_utf8()])
            .collect()
    } else {
        text.split(delimiter).collect()
    }
}
