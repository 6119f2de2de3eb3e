use passwd_registry::{ApiResponse, api::Api};
use tracing::instrument;

use super::{Registries, parse_filter};

#[derive(Debug, clap::Parser)]
pub struct Request {
    /// The route, e.g. /users/1000/groups
    path: String,

    /// Query-string parameters
    #[arg(value_parser = parse_filter, value_name = "KEY=VALUE")]
    params: Vec<(String, String)>,
}

impl Request {
    #[instrument(level = "debug", skip(registries))]
    pub fn run(self, registries: &Registries) -> ApiResponse {
        Api::new(&registries.users, &registries.groups).get(&self.path, self.params)
    }
}
