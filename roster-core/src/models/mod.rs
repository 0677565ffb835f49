//! A collection of models to represent the rostering problem, cost accounting and run state.

pub mod diff;
pub mod problem;
pub mod solution;

pub use self::diff::{DriverInfo, ExternalTypeInfo, PenaltyInfo, Stats, TotalInfo};
pub use self::problem::Problem;
pub use self::solution::{RunState, Solution};
