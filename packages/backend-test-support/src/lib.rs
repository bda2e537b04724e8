//! Shared helpers for library backend tests.
//!
//! Logging initialization, problem-details assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
