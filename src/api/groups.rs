use super::{ApiResponse, query_from_params, respond, respond_one};
use crate::{domain::Query, storage::GroupRegistry};

/// `GET /groups`
#[must_use]
pub fn all_groups(groups: &GroupRegistry) -> ApiResponse {
    respond(groups.get_all_groups())
}

/// `GET /groups/query?<attribute>=<value>&...`
///
/// The query-string key `member` is looked up as the `members` attribute, so
/// `member=saned` finds the groups that list `saned` among their members.
#[must_use]
pub fn query_groups<I, K, V>(groups: &GroupRegistry, params: I) -> ApiResponse
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut query = query_from_params(params);
    query.rename("member", "members");
    respond(groups.get_groups_by_query(&query))
}

/// `GET /groups/:gid`
///
/// Responds with the first group with this gid, or `404`.
#[must_use]
pub fn group_by_gid(groups: &GroupRegistry, gid: &str) -> ApiResponse {
    let first = groups
        .get_groups_by_query(&Query::new().with("gid", gid))
        .map(|groups| groups.into_iter().next());
    respond_one(first)
}
