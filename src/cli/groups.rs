use passwd_registry::{ApiResponse, api};
use tracing::instrument;

use super::{Registries, parse_filter};

#[derive(Debug, clap::Parser)]
pub struct Groups {
    #[command(subcommand)]
    command: Option<GroupsCommand>,
}

#[derive(Debug, clap::Subcommand)]
enum GroupsCommand {
    /// Find groups matching every ATTRIBUTE=VALUE filter
    ///
    /// Attributes are name, gid and member. A member filter matches groups
    /// that list the user among their members.
    Query {
        #[arg(value_parser = parse_filter, value_name = "ATTRIBUTE=VALUE")]
        filters: Vec<(String, String)>,
    },

    /// Show the group with the given gid
    Get { gid: String },
}

impl Groups {
    #[instrument(level = "debug", skip(registries))]
    pub fn run(self, registries: &Registries) -> ApiResponse {
        match self.command {
            None => api::all_groups(&registries.groups),
            Some(GroupsCommand::Query { filters }) => {
                api::query_groups(&registries.groups, filters)
            }
            Some(GroupsCommand::Get { gid }) => api::group_by_gid(&registries.groups, &gid),
        }
    }
}
