//! Value types which describe accumulated cost accounting and *changes* to it.
//!
//! Every incremental update is expressed as a sum of these values, so they form a commutative group
//! under addition: negation and addition are field-wise, subtraction is addition of a negation.
//! Equality is approximate with an absolute tolerance of `0.01` per floating point field.

/// Implements subtraction and compound assignment operators using `Add` and `Neg` of a copy type.
macro_rules! impl_copy_group_ops {
    ($type_: ty) => {
        impl std::ops::Sub for $type_ {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                self + (-other)
            }
        }

        impl std::ops::AddAssign for $type_ {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl std::ops::SubAssign for $type_ {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }
    };
}

mod stats;
pub use self::stats::*;

mod penalty;
pub use self::penalty::*;

mod driver_info;
pub use self::driver_info::*;

mod external_info;
pub use self::external_info::*;

mod total_info;
pub use self::total_info::*;
