use super::{ApiResponse, query_from_params, respond, respond_one};
use crate::storage::{GroupRegistry, UserRegistry};

/// `GET /users`
#[must_use]
pub fn all_users(users: &UserRegistry) -> ApiResponse {
    respond(users.get_all_users())
}

/// `GET /users/query?<attribute>=<value>&...`
#[must_use]
pub fn query_users<I, K, V>(users: &UserRegistry, params: I) -> ApiResponse
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    respond(users.get_users_by_query(&query_from_params(params)))
}

/// `GET /users/:uid`
///
/// Responds with the first user with this uid, or `404`.
#[must_use]
pub fn user_by_uid(users: &UserRegistry, uid: &str) -> ApiResponse {
    respond_one(users.get_user_by_uid(uid))
}

/// `GET /users/:uid/groups`
///
/// Responds with the groups listing the user as a member, or `404` if there
/// is no user with this uid.
#[must_use]
pub fn groups_for_user(users: &UserRegistry, groups: &GroupRegistry, uid: &str) -> ApiResponse {
    let user = match users.get_user_by_uid(uid) {
        Ok(Some(user)) => user,
        Ok(None) => return ApiResponse::not_found(),
        Err(e) => return ApiResponse::from(&e),
    };
    respond(groups.get_groups_for_member(&user.name))
}
