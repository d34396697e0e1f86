//! Agent definitions registered with the project

pub mod dredd;

pub use dredd::{dredd_agent, dredd_character};

use crate::project::Project;

/// Build the project registry the host runtime loads at startup
pub fn project() -> Project {
    Project::new(vec![dredd_agent()])
}
