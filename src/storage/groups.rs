use crate::{
    domain::{GroupRecord, Query},
    storage::{Error, Registry},
};

/// The registry for the group file.
pub type GroupRegistry = Registry<GroupRecord>;

impl Registry<GroupRecord> {
    /// Reads every group in the group file, in file order.
    ///
    /// # Errors
    ///
    /// - [`Error::Read`] if the group file cannot be read
    /// - [`Error::Parse`] if any line does not have exactly 4 columns
    pub fn get_all_groups(&self) -> Result<Vec<GroupRecord>, Error> {
        self.load()
    }

    /// Reads the groups matching every filter in `query`.
    ///
    /// Valid attributes are `name`, `gid` and `members`. A `members` filter
    /// matches groups that list the value as one of their members. Any other
    /// attribute matches nothing.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`GroupRegistry::get_all_groups`] does.
    pub fn get_groups_by_query(&self, query: &Query) -> Result<Vec<GroupRecord>, Error> {
        self.query(query)
    }

    /// Reads the groups that list `user` as a member.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`GroupRegistry::get_all_groups`] does.
    pub fn get_groups_for_member(&self, user: &str) -> Result<Vec<GroupRecord>, Error> {
        self.query(&Query::new().with("members", user))
    }
}
