use serde::{Deserialize, Serialize};

use super::{Field, Id, Record, RecordKind, parse_id};

/// A group, one line of a group file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// The group name.
    pub name: String,
    /// The numeric group id.
    pub gid: Id,
    /// Names of the users listed as members, in file order.
    ///
    /// An empty member column yields an empty list.
    pub members: Vec<String>,
}

impl GroupRecord {
    /// Returns `true` if `user` is listed as a member of this group.
    #[must_use]
    pub fn has_member(&self, user: &str) -> bool {
        self.members.iter().any(|member| member == user)
    }
}

impl Record for GroupRecord {
    const KIND: RecordKind = RecordKind::Group;

    fn from_columns(columns: &[&str]) -> Option<Self> {
        let [name, _password, gid, members] = columns else {
            return None;
        };

        let members = if members.is_empty() {
            Vec::new()
        } else {
            members.split(',').map(str::to_string).collect()
        };

        Some(Self {
            name: (*name).to_string(),
            gid: parse_id(gid),
            members,
        })
    }

    fn attribute(&self, name: &str) -> Option<Field<'_>> {
        let field = match name {
            "name" => Field::Text(&self.name),
            "gid" => Field::Id(self.gid),
            "members" => Field::List(&self.members),
            _ => return None,
        };
        Some(field)
    }
}
