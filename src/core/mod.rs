pub mod catalog;
pub mod parser;
pub mod planner;
pub mod report;

pub use crate::domain::model::Course;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
