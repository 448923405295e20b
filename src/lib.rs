pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, PlannerSettings};
pub use crate::core::catalog::{Catalog, Lookup};
pub use crate::core::planner::Planner;
pub use crate::domain::model::Course;
pub use crate::utils::error::{PlannerError, Result};
