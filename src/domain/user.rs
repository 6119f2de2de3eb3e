use serde::{Deserialize, Serialize};

use super::{Field, Id, Record, RecordKind, parse_id};

/// A user account, one line of a passwd file.
///
/// The password placeholder column is discarded. Duplicate names and uids are
/// preserved as they appear in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// The login name.
    pub name: String,
    /// The numeric user id.
    pub uid: Id,
    /// The numeric id of the primary group.
    pub gid: Id,
    /// The comment (GECOS) column.
    pub comment: String,
    /// The home directory.
    pub home: String,
    /// The login shell.
    pub shell: String,
}

impl Record for UserRecord {
    const KIND: RecordKind = RecordKind::Passwd;

    fn from_columns(columns: &[&str]) -> Option<Self> {
        let [name, _password, uid, gid, comment, home, shell] = columns else {
            return None;
        };

        Some(Self {
            name: (*name).to_string(),
            uid: parse_id(uid),
            gid: parse_id(gid),
            comment: (*comment).to_string(),
            home: (*home).to_string(),
            shell: (*shell).to_string(),
        })
    }

    fn attribute(&self, name: &str) -> Option<Field<'_>> {
        let field = match name {
            "name" => Field::Text(&self.name),
            "uid" => Field::Id(self.uid),
            "gid" => Field::Id(self.gid),
            "comment" => Field::Text(&self.comment),
            "home" => Field::Text(&self.home),
            "shell" => Field::Text(&self.shell),
            _ => return None,
        };
        Some(field)
    }
}
