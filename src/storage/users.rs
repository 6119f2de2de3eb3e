use crate::{
    domain::{FilterValue, Query, UserRecord},
    storage::{Error, Registry},
};

/// The registry for the passwd file.
pub type UserRegistry = Registry<UserRecord>;

impl Registry<UserRecord> {
    /// Reads every user in the passwd file, in file order.
    ///
    /// # Errors
    ///
    /// - [`Error::Read`] if the passwd file cannot be read
    /// - [`Error::Parse`] if any line does not have exactly 7 columns
    pub fn get_all_users(&self) -> Result<Vec<UserRecord>, Error> {
        self.load()
    }

    /// Reads the users matching every filter in `query`.
    ///
    /// Valid attributes are `name`, `uid`, `gid`, `comment`, `home` and
    /// `shell`. Any other attribute matches nothing.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`UserRegistry::get_all_users`] does.
    pub fn get_users_by_query(&self, query: &Query) -> Result<Vec<UserRecord>, Error> {
        self.query(query)
    }

    /// Finds the first user with the given uid.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`UserRegistry::get_all_users`] does.
    pub fn get_user_by_uid(
        &self,
        uid: impl Into<FilterValue>,
    ) -> Result<Option<UserRecord>, Error> {
        let users = self.query(&Query::new().with("uid", uid))?;
        Ok(users.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::domain::RecordKind;

    fn registry() -> UserRegistry {
        let registry = UserRegistry::new();
        registry.set_path(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/fake.passwd"));
        registry
    }

    #[test]
    fn reads_every_user() {
        let users = registry().get_all_users().unwrap();

        assert_eq!(users.len(), 25);
        assert_eq!(
            users[24],
            UserRecord {
                name: "keith".to_string(),
                uid: Some(1000),
                gid: Some(1000),
                comment: "Keith Chester,,,".to_string(),
                home: "/home/keith".to_string(),
                shell: "/bin/bash".to_string(),
            }
        );
    }

    #[test]
    fn empty_query_returns_everything() {
        let registry = registry();

        assert_eq!(
            registry.get_users_by_query(&Query::new()).unwrap(),
            registry.get_all_users().unwrap()
        );
    }

    #[test]
    fn query_by_shell() {
        let users = registry()
            .get_users_by_query(&Query::new().with("shell", "/bin/bash"))
            .unwrap();

        let names: Vec<_> = users.iter().map(|user| user.name.as_str()).collect();
        assert_eq!(names, ["root", "keith"]);
    }

    #[test]
    fn query_by_uid_accepts_numbers_and_text() {
        let registry = registry();

        let by_number = registry
            .get_users_by_query(&Query::new().with("uid", 1000_i64))
            .unwrap();
        let by_text = registry
            .get_users_by_query(&Query::new().with("uid", "1000"))
            .unwrap();

        assert_eq!(by_number.len(), 1);
        assert_eq!(by_number, by_text);
    }

    #[test]
    fn query_with_no_matches_is_empty() {
        let users = registry()
            .get_users_by_query(&Query::new().with("uid", 4242_i64))
            .unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn unknown_attribute_returns_nothing() {
        let users = registry()
            .get_users_by_query(&Query::new().with("password", "x"))
            .unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn query_propagates_parse_errors() {
        let registry = registry();
        registry.set_column_delimiter(";");

        let error = registry.get_users_by_query(&Query::new()).unwrap_err();

        assert_eq!(error.kind(), RecordKind::Passwd);
        assert_eq!(error.to_string(), "There was an issue parsing the passwd file");
    }

    #[test]
    fn user_by_uid() {
        let registry = registry();

        assert_eq!(registry.get_user_by_uid(0_i64).unwrap().unwrap().name, "root");
        assert!(registry.get_user_by_uid("9999").unwrap().is_none());
    }
}
