//! HTTP handlers, independent of any web framework.
//!
//! Each handler takes the registries it needs and returns an [`ApiResponse`]:
//! a status code and an optional JSON body. Transport is left to the caller;
//! [`Api::get`] routes a request path to the right handler.
//!
//! | route                 | handler                  |
//! |-----------------------|--------------------------|
//! | `/users`              | [`all_users`]            |
//! | `/users/query`        | [`query_users`]          |
//! | `/users/:uid`         | [`user_by_uid`]          |
//! | `/users/:uid/groups`  | [`groups_for_user`]      |
//! | `/groups`             | [`all_groups`]           |
//! | `/groups/query`       | [`query_groups`]         |
//! | `/groups/:gid`        | [`group_by_gid`]         |

mod groups;
mod users;

pub use groups::{all_groups, group_by_gid, query_groups};
pub use users::{all_users, groups_for_user, query_users, user_by_uid};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{
    domain::{FilterValue, Query, RecordKind},
    storage::{Error, GroupRegistry, UserRegistry},
};

/// Status of a successful request.
pub const OK: u16 = 200;
/// Status of a lookup that found nothing.
pub const NOT_FOUND: u16 = 404;
/// Status of a request that failed.
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Code reported for failures other than reading or parsing a records file.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// The outcome of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The JSON payload. `None` means an empty body.
    pub body: Option<Value>,
}

impl ApiResponse {
    /// A `200` response carrying `value` as JSON.
    ///
    /// If `value` cannot be serialized the response is a `500` with the
    /// [`UNKNOWN_ERROR`] code instead.
    #[must_use]
    pub fn ok<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(body) => Self {
                status: OK,
                body: Some(body),
            },
            Err(e) => {
                tracing::error!("Failed to serialize response: {e}");
                Self::failure(&ErrorResponse {
                    code: UNKNOWN_ERROR.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }

    /// A `404` response with an empty body.
    #[must_use]
    pub const fn not_found() -> Self {
        Self {
            status: NOT_FOUND,
            body: None,
        }
    }

    /// A `500` response describing the error.
    #[must_use]
    pub fn failure(error: &ErrorResponse) -> Self {
        Self {
            status: INTERNAL_SERVER_ERROR,
            body: Some(json!({ "code": error.code, "message": error.message })),
        }
    }

    /// Returns `true` for a `2xx` status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

impl From<&Error> for ApiResponse {
    fn from(error: &Error) -> Self {
        tracing::error!("{error}: {error:?}");
        Self::failure(&ErrorResponse::from(error))
    }
}

/// The body of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A stable, machine-readable code, e.g. `GROUP_PARSE_ERROR`.
    pub code: String,
    /// The human-readable message.
    pub message: String,
}

impl From<&Error> for ErrorResponse {
    fn from(error: &Error) -> Self {
        Self {
            code: error_code(error).to_string(),
            message: error.to_string(),
        }
    }
}

/// The machine-readable code for a registry error.
#[must_use]
pub const fn error_code(error: &Error) -> &'static str {
    match (error, error.kind()) {
        (Error::Read { .. }, RecordKind::Passwd) => "PASSWD_FILE_LOCATION_ERROR",
        (Error::Parse { .. }, RecordKind::Passwd) => "PASSWD_PARSE_ERROR",
        (Error::Read { .. }, RecordKind::Group) => "GROUP_FILE_LOCATION_ERROR",
        (Error::Parse { .. }, RecordKind::Group) => "GROUP_PARSE_ERROR",
    }
}

/// Turns a list result into a response.
fn respond<T: Serialize>(result: Result<Vec<T>, Error>) -> ApiResponse {
    match result {
        Ok(records) => ApiResponse::ok(&records),
        Err(e) => ApiResponse::from(&e),
    }
}

/// Turns a single-item lookup into a response; nothing found is a `404`.
fn respond_one<T: Serialize>(result: Result<Option<T>, Error>) -> ApiResponse {
    match result {
        Ok(Some(record)) => ApiResponse::ok(&record),
        Ok(None) => ApiResponse::not_found(),
        Err(e) => ApiResponse::from(&e),
    }
}

/// Builds a query from query-string parameters. Every value is text.
fn query_from_params<I, K, V>(params: I) -> Query
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    params
        .into_iter()
        .map(|(key, value)| (key.into(), FilterValue::Text(value.into())))
        .collect()
}

/// Routes `GET` requests to the handlers.
#[derive(Debug, Clone, Copy)]
pub struct Api<'a> {
    users: &'a UserRegistry,
    groups: &'a GroupRegistry,
}

impl<'a> Api<'a> {
    /// Creates a router over the given registries.
    #[must_use]
    pub const fn new(users: &'a UserRegistry, groups: &'a GroupRegistry) -> Self {
        Self { users, groups }
    }

    /// Handles `GET path`, with `params` taken from the query string.
    ///
    /// Leading and trailing slashes are ignored. Parameters are only used by
    /// the `/query` routes. Unknown paths are a `404`.
    pub fn get<I, K, V>(&self, path: &str, params: I) -> ApiResponse
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        tracing::debug!("GET /{}", segments.join("/"));

        match segments.as_slice() {
            ["users"] => all_users(self.users),
            ["users", "query"] => query_users(self.users, params),
            ["users", uid] => user_by_uid(self.users, uid),
            ["users", uid, "groups"] => groups_for_user(self.users, self.groups, uid),
            ["groups"] => all_groups(self.groups),
            ["groups", "query"] => query_groups(self.groups, params),
            ["groups", gid] => group_by_gid(self.groups, gid),
            _ => ApiResponse::not_found(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn error_codes_follow_kind_and_failure() {
        let read = Error::Read {
            kind: RecordKind::Group,
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let parse = Error::Parse {
            kind: RecordKind::Passwd,
            line: 1,
            columns: 1,
        };

        assert_eq!(error_code(&read), "GROUP_FILE_LOCATION_ERROR");
        assert_eq!(error_code(&parse), "PASSWD_PARSE_ERROR");
    }

    #[test]
    fn failures_carry_code_and_message() {
        let error = Error::Parse {
            kind: RecordKind::Group,
            line: 1,
            columns: 1,
        };

        let response = ApiResponse::from(&error);

        assert_eq!(response.status, INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = serde_json::from_value(response.body.unwrap()).unwrap();
        assert_eq!(body.code, "GROUP_PARSE_ERROR");
        assert_eq!(body.message, "There was an issue parsing the group file");
    }

    #[test]
    fn not_found_has_no_body() {
        let response = ApiResponse::not_found();

        assert_eq!(response.status, NOT_FOUND);
        assert!(response.body.is_none());
        assert!(!response.is_success());
    }

    #[test]
    fn params_become_text_filters() {
        let query = query_from_params([("uid", "1000")]);
        assert_eq!(query.get("uid"), Some(&FilterValue::from("1000")));
    }
}
