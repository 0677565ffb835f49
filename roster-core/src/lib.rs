//! A core crate of a driver rostering planner.
//!
//! Activities, e.g. train driving legs, are assigned to internal and external drivers by a simulated
//! annealing search. The search evaluates every candidate move incrementally: only shifts around the
//! changed positions are re-evaluated and the resulting change is expressed as a value of the diff
//! algebra from [`models::diff`]. Accumulated values are kept equal to a full recomputation, which is
//! exposed via [`models::solution::RunState::check_consistency`].
//!
//! # Example
//!
//! ```no_run
//! use roster_core::prelude::*;
//! use std::sync::Arc;
//!
//! # fn create_problem() -> Problem { unimplemented!() }
//! let problem = Arc::new(create_problem());
//! let environment = Arc::new(Environment::default());
//!
//! let result = SolverBuilder::new(problem, environment)
//!     .with_max_iterations(Some(10_000))
//!     .build()
//!     .and_then(|solver| solver.solve())
//!     .expect("cannot solve problem");
//!
//! println!("best cost: {}", result.best.total.stats.cost);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub mod costs;
pub mod models;
pub mod operations;
pub mod prelude;
pub mod solver;
pub mod utils;
