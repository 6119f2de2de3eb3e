mod error;
mod groups;
mod registry;
mod users;

pub use crate::domain::Settings;
pub use error::Error;
pub use groups::GroupRegistry;
pub use registry::{Registry, parse};
pub use users::UserRegistry;
