//! Route-level behaviour of the HTTP handlers against fixture files.

use std::path::{Path, PathBuf};

use passwd_registry::{
    ApiResponse, ErrorResponse, GroupRecord, GroupRegistry, UserRecord, UserRegistry,
    api::{self, Api},
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn registries() -> (UserRegistry, GroupRegistry) {
    let users = UserRegistry::new();
    users.set_path(fixture("fake.passwd"));
    let groups = GroupRegistry::new();
    groups.set_path(fixture("fake.group"));
    (users, groups)
}

fn error_body(response: ApiResponse) -> ErrorResponse {
    assert_eq!(response.status, 500);
    serde_json::from_value(response.body.expect("error responses have a body")).unwrap()
}

fn groups_body(response: ApiResponse) -> Vec<GroupRecord> {
    assert_eq!(response.status, 200);
    serde_json::from_value(response.body.unwrap()).unwrap()
}

fn users_body(response: ApiResponse) -> Vec<UserRecord> {
    assert_eq!(response.status, 200);
    serde_json::from_value(response.body.unwrap()).unwrap()
}

const NO_PARAMS: [(&str, &str); 0] = [];

#[test]
fn all_groups_returns_every_group() {
    let (_, groups) = registries();

    assert_eq!(groups_body(api::all_groups(&groups)).len(), 23);
}

#[test]
fn all_groups_reports_a_bad_path() {
    let (_, groups) = registries();
    groups.set_path("./doesnt/exist");

    let error = error_body(api::all_groups(&groups));

    assert_eq!(error.code, "GROUP_FILE_LOCATION_ERROR");
    assert_eq!(error.message, "Something went wrong reading the group file");
}

#[test]
fn all_groups_reports_a_parse_failure() {
    let (_, groups) = registries();
    groups.set_line_delimiter("\t");

    let error = error_body(api::all_groups(&groups));

    assert_eq!(error.code, "GROUP_PARSE_ERROR");
    assert_eq!(error.message, "There was an issue parsing the group file");
}

#[test]
fn query_groups_by_name() {
    let (_, groups) = registries();

    let found = groups_body(api::query_groups(&groups, [("name", "sambashare")]));

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "sambashare");
    assert_eq!(found[0].members.len(), 2);
}

#[test]
fn query_groups_with_no_match_is_an_empty_list() {
    let (_, groups) = registries();

    let response = api::query_groups(&groups, [("name", "doesntexist")]);

    assert_eq!(response.body, Some(serde_json::json!([])));
}

#[test]
fn query_groups_maps_member_to_members() {
    let (_, groups) = registries();

    let found = groups_body(api::query_groups(&groups, [("member", "saned")]));

    let names: Vec<_> = found.iter().map(|group| group.name.as_str()).collect();
    assert_eq!(names, ["scanner", "sambashare"]);
}

#[test]
fn query_groups_with_an_unknown_attribute_is_empty() {
    let (_, groups) = registries();

    let found = groups_body(api::query_groups(&groups, [("password", "x")]));

    assert!(found.is_empty());
}

#[test]
fn query_groups_reports_errors() {
    let (_, groups) = registries();
    groups.set_path("./doesnt/exist");
    assert_eq!(
        error_body(api::query_groups(&groups, NO_PARAMS)).code,
        "GROUP_FILE_LOCATION_ERROR"
    );

    let (_, groups) = registries();
    groups.set_line_delimiter("\t");
    assert_eq!(
        error_body(api::query_groups(&groups, NO_PARAMS)).code,
        "GROUP_PARSE_ERROR"
    );
}

#[test]
fn group_by_gid_finds_the_group() {
    let (_, groups) = registries();

    let response = api::group_by_gid(&groups, "121");

    assert_eq!(response.status, 200);
    let group: GroupRecord = serde_json::from_value(response.body.unwrap()).unwrap();
    assert_eq!(group.name, "scanner");
    assert!(group.has_member("saned"));
}

#[test]
fn group_by_unknown_gid_is_not_found() {
    let (_, groups) = registries();

    let response = api::group_by_gid(&groups, "9999");

    assert_eq!(response.status, 404);
    assert!(response.body.is_none());
}

#[test]
fn group_by_gid_reports_errors() {
    let (_, groups) = registries();
    groups.set_line_delimiter("\t");

    assert_eq!(
        error_body(api::group_by_gid(&groups, "121")).code,
        "GROUP_PARSE_ERROR"
    );
}

#[test]
fn all_users_returns_every_user() {
    let (users, _) = registries();

    let found = users_body(api::all_users(&users));

    assert_eq!(found.len(), 25);
    assert_eq!(found[24].comment, "Keith Chester,,,");
}

#[test]
fn all_users_reports_errors() {
    let (users, _) = registries();
    users.set_path("./doesnt/exist");
    let error = error_body(api::all_users(&users));
    assert_eq!(error.code, "PASSWD_FILE_LOCATION_ERROR");
    assert_eq!(error.message, "Something went wrong reading the passwd file");

    let (users, _) = registries();
    users.set_column_delimiter("_");
    let error = error_body(api::all_users(&users));
    assert_eq!(error.code, "PASSWD_PARSE_ERROR");
    assert_eq!(error.message, "There was an issue parsing the passwd file");
}

#[test]
fn query_users_by_shell() {
    let (users, _) = registries();

    let found = users_body(api::query_users(&users, [("shell", "/bin/bash")]));

    assert_eq!(found.len(), 2);
}

#[test]
fn user_by_uid() {
    let (users, _) = registries();

    let response = api::user_by_uid(&users, "1000");
    assert_eq!(response.status, 200);
    assert_eq!(response.body.unwrap()["name"], "keith");

    assert_eq!(api::user_by_uid(&users, "4242").status, 404);
}

#[test]
fn groups_for_user_lists_memberships() {
    let (users, groups) = registries();

    let found = groups_body(api::groups_for_user(&users, &groups, "117"));

    let names: Vec<_> = found.iter().map(|group| group.name.as_str()).collect();
    assert_eq!(names, ["scanner", "sambashare"]);
    assert_eq!(api::groups_for_user(&users, &groups, "4242").status, 404);
}

#[test]
fn groups_for_user_reports_group_errors() {
    let (users, groups) = registries();
    groups.set_path("./doesnt/exist");

    assert_eq!(
        error_body(api::groups_for_user(&users, &groups, "1000")).code,
        "GROUP_FILE_LOCATION_ERROR"
    );
}

#[test]
fn router_dispatches_by_path() {
    let (users, groups) = registries();
    let api = Api::new(&users, &groups);

    assert_eq!(users_body(api.get("/users", NO_PARAMS)).len(), 25);
    assert_eq!(groups_body(api.get("/groups/", NO_PARAMS)).len(), 23);
    assert_eq!(
        groups_body(api.get("/groups/query", [("member", "keith"), ("gid", "27")])).len(),
        1
    );
    assert_eq!(api.get("/groups/121", NO_PARAMS).status, 200);
    assert_eq!(api.get("/groups/9999", NO_PARAMS).status, 404);
    assert_eq!(api.get("/users/0", NO_PARAMS).body.unwrap()["shell"], "/bin/bash");
    assert_eq!(groups_body(api.get("/users/1000/groups", NO_PARAMS)).len(), 5);
    assert_eq!(api.get("/nowhere", NO_PARAMS).status, 404);
}
