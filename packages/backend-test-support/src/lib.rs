//! Test helpers shared by the bowling backend's unit and integration tests.

pub mod logging;
pub mod problem_details;

pub use problem_details::{assert_problem_details_from_parts, assert_problem_details_structure};
