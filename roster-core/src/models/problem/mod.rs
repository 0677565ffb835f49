//! Immutable problem definition: activities, drivers, travel information and rules.

mod activity;
pub use self::activity::*;

mod driver;
pub use self::driver::*;

mod problem;
pub use self::problem::*;

mod rules;
pub use self::rules::*;

mod salary;
pub use self::salary::*;

mod satisfaction;
pub use self::satisfaction::*;

mod travel;
pub use self::travel::*;
