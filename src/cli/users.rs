use passwd_registry::{ApiResponse, api};
use tracing::instrument;

use super::{Registries, parse_filter};

#[derive(Debug, clap::Parser)]
pub struct Users {
    #[command(subcommand)]
    command: Option<UsersCommand>,
}

#[derive(Debug, clap::Subcommand)]
enum UsersCommand {
    /// Find users matching every ATTRIBUTE=VALUE filter
    ///
    /// Attributes are name, uid, gid, comment, home and shell.
    Query {
        #[arg(value_parser = parse_filter, value_name = "ATTRIBUTE=VALUE")]
        filters: Vec<(String, String)>,
    },

    /// Show the user with the given uid
    Get { uid: String },

    /// List the groups the user with the given uid is a member of
    Groups { uid: String },
}

impl Users {
    #[instrument(level = "debug", skip(registries))]
    pub fn run(self, registries: &Registries) -> ApiResponse {
        match self.command {
            None => api::all_users(&registries.users),
            Some(UsersCommand::Query { filters }) => api::query_users(&registries.users, filters),
            Some(UsersCommand::Get { uid }) => api::user_by_uid(&registries.users, &uid),
            Some(UsersCommand::Groups { uid }) => {
                api::groups_for_user(&registries.users, &registries.groups, &uid)
            }
        }
    }
}
