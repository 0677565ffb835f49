pub use self::problem::*;

mod random_problem;
pub use self::random_problem::*;
