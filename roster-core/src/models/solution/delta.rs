use crate::models::{DriverInfo, ExternalTypeInfo, TotalInfo};
use tinyvec::TinyVec;

/// A change of driver accumulators: driver slot and its info diff.
pub type DriverDeltas = TinyVec<[(usize, DriverInfo); 2]>;

/// A change of external type accumulators: type index and its info diff.
pub type ExternalDeltas = TinyVec<[(usize, ExternalTypeInfo); 2]>;

/// A complete change of run state accumulators caused by an operation.
#[derive(Clone, Debug, Default)]
pub struct StateDelta {
    /// A change of the global total.
    pub total: TotalInfo,
    /// Changes of affected drivers.
    pub drivers: DriverDeltas,
    /// Changes of affected external types.
    pub externals: ExternalDeltas,
}
