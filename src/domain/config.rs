use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::RecordKind;

/// Where a registry finds its file and how the file is delimited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Location of the records file.
    pub path: PathBuf,
    /// Separates records. Defaults to `"\n"`.
    pub line_delimiter: String,
    /// Separates columns within a record. Defaults to `":"`.
    pub column_delimiter: String,
}

impl Settings {
    /// The system defaults for the given kind of file.
    #[must_use]
    pub fn defaults_for(kind: RecordKind) -> Self {
        Self {
            path: PathBuf::from(kind.default_path()),
            line_delimiter: default_line_delimiter(),
            column_delimiter: default_column_delimiter(),
        }
    }
}

/// Configuration for both registries.
///
/// Every value is optional in the file; anything left out falls back to the
/// system defaults (`/etc/passwd`, `/etc/group`, newline and colon
/// delimiters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Settings for the user registry.
    pub passwd: Settings,
    /// Settings for the group registry.
    pub group: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            passwd: Settings::defaults_for(RecordKind::Passwd),
            group: Settings::defaults_for(RecordKind::Group),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The settings for the given kind of file.
    #[must_use]
    pub const fn settings(&self, kind: RecordKind) -> &Settings {
        match kind {
            RecordKind::Passwd => &self.passwd,
            RecordKind::Group => &self.group,
        }
    }
}

fn default_line_delimiter() -> String {
    "\n".to_string()
}

fn default_column_delimiter() -> String {
    ":".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        passwd: SectionV1,

        #[serde(default)]
        group: SectionV1,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SectionV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    line_delimiter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    column_delimiter: Option<String>,
}

impl SectionV1 {
    fn into_settings(self, kind: RecordKind) -> Settings {
        let defaults = Settings::defaults_for(kind);
        Settings {
            path: self.path.unwrap_or(defaults.path),
            line_delimiter: self.line_delimiter.unwrap_or(defaults.line_delimiter),
            column_delimiter: self.column_delimiter.unwrap_or(defaults.column_delimiter),
        }
    }
}

impl From<Settings> for SectionV1 {
    fn from(settings: Settings) -> Self {
        Self {
            path: Some(settings.path),
            line_delimiter: Some(settings.line_delimiter),
            column_delimiter: Some(settings.column_delimiter),
        }
    }
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { passwd, group } => Self {
                passwd: passwd.into_settings(RecordKind::Passwd),
                group: group.into_settings(RecordKind::Group),
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            passwd: config.passwd.into(),
            group: config.group.into(),
        }
    }
}
