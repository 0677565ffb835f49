//! Mutable run state: assignment, driver paths, hotel stays and accumulators.

mod delta;
pub use self::delta::*;

mod path;
pub use self::path::*;

mod state;
pub use self::state::*;
