//! Missions: the fixed catalog, random assignment, and evaluation.

pub mod catalog;
pub mod evaluator;

pub use catalog::{Mission, MissionCatalog, FORTRESS_NAME, RED_FACTION};
pub use evaluator::is_mission_complete;
