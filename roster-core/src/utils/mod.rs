//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod parallel;
pub use self::parallel::*;

mod random;
pub use self::random::*;

mod timing;
pub use self::timing::*;

/// A type alias for floating point values used in cost accounting.
pub type Float = f64;

/// A type alias for time values: whole minutes since the start of the planning horizon.
pub type Minutes = i64;
