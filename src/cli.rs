use std::path::PathBuf;

mod groups;
mod request;
mod users;

use anyhow::Context;
use clap::ArgAction;
use groups::Groups;
use passwd_registry::{ApiResponse, Config, GroupRegistry, UserRegistry};
use request::Request;
use users::Users;

/// Parse a `key=value` filter argument.
fn parse_filter(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("missing attribute name in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the passwd file (overrides the configuration file)
    #[arg(long, global = true)]
    passwd: Option<PathBuf>,

    /// Path to the group file (overrides the configuration file)
    #[arg(long, global = true)]
    group: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let registries = Registries::new(self.load_config()?);
        let response = self.command.run(&registries);
        print_response(&response)
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(path) = &self.passwd {
            config.passwd.path.clone_from(path);
        }
        if let Some(path) = &self.group {
            config.group.path.clone_from(path);
        }

        tracing::debug!("Using configuration {config:?}");
        Ok(config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// The two registries, built once from the configuration and handed to the
/// commands.
#[derive(Debug)]
pub struct Registries {
    users: UserRegistry,
    groups: GroupRegistry,
}

impl Registries {
    fn new(config: Config) -> Self {
        Self {
            users: UserRegistry::with_settings(config.passwd),
            groups: GroupRegistry::with_settings(config.group),
        }
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List or query users
    Users(Users),

    /// List or query groups
    Groups(Groups),

    /// Issue a GET request against a route, e.g. `/groups/query member=saned`
    Get(Request),
}

impl Command {
    fn run(self, registries: &Registries) -> ApiResponse {
        match self {
            Self::Users(command) => command.run(registries),
            Self::Groups(command) => command.run(registries),
            Self::Get(command) => command.run(registries),
        }
    }
}

/// Print the body as JSON. Anything but a `2xx` status is an error.
fn print_response(response: &ApiResponse) -> anyhow::Result<()> {
    if let Some(body) = &response.body {
        println!("{}", serde_json::to_string_pretty(body)?);
    }

    if !response.is_success() {
        anyhow::bail!("request failed with status {}", response.status);
    }
    Ok(())
}
