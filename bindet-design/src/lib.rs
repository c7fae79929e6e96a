pub mod catalog;
pub mod config;
pub mod error;
pub mod planner;
pub mod trial;

pub use catalog::StimulusCatalog;
pub use config::SessionConfig;
pub use error::DesignError;
pub use planner::SessionPlanner;
pub use trial::{BlockPlan, PlannedTrial, SessionPlan};
