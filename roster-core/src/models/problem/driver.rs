use crate::models::problem::Activity;
use crate::utils::{Float, Minutes};
use rustc_hash::FxHashSet;

/// A time range, e.g. a period when a driver cannot work.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimeRange {
    /// Start time.
    pub start: Minutes,
    /// End time.
    pub end: Minutes,
}

impl TimeRange {
    /// Checks whether the range shares some time with the given one.
    pub fn intersects(&self, start: Minutes, end: Minutes) -> bool {
        start < self.end && end > self.start
    }
}

/// Specifies driver specific data.
#[derive(Clone, Debug)]
pub enum DriverKind {
    /// A driver employed by the company.
    Internal {
        /// A target working time for the planning horizon.
        contract_time: Minutes,
        /// Optional drivers are not required to get work and do not count in satisfaction score.
        is_optional: bool,
        /// Periods when the driver cannot work, e.g. holidays.
        unavailabilities: Vec<TimeRange>,
    },
    /// A contracted driver which belongs to an external driver type pool.
    External {
        /// An index of the external driver type.
        type_index: usize,
    },
}

/// Represents a driver which can be assigned to activities.
#[derive(Clone, Debug)]
pub struct Driver {
    /// A stable slot used to index per driver accumulators.
    pub slot: usize,
    /// A driver name.
    pub name: String,
    /// Qualifications the driver has.
    pub qualifications: FxHashSet<String>,
    /// A travel matrix index of the home location, if known.
    pub home_location: Option<usize>,
    /// Whether the driver can stay in a hotel between shifts.
    pub is_hotel_allowed: bool,
    /// An index of salary settings in problem rules.
    pub salary: usize,
    /// Driver kind specific data.
    pub kind: DriverKind,
}

impl Driver {
    /// Returns true if driver is internal.
    pub fn is_internal(&self) -> bool {
        matches!(self.kind, DriverKind::Internal { .. })
    }

    /// Returns true if driver is internal and required to get work.
    pub fn is_required_internal(&self) -> bool {
        matches!(self.kind, DriverKind::Internal { is_optional: false, .. })
    }

    /// Returns external driver type index if the driver is external.
    pub fn external_type(&self) -> Option<usize> {
        match self.kind {
            DriverKind::External { type_index } => Some(type_index),
            DriverKind::Internal { .. } => None,
        }
    }

    /// Returns contract time for internal driver.
    pub fn contract_time(&self) -> Option<Minutes> {
        match self.kind {
            DriverKind::Internal { contract_time, .. } => Some(contract_time),
            DriverKind::External { .. } => None,
        }
    }

    /// Checks whether driver can work within the given time range.
    pub fn is_available(&self, start: Minutes, end: Minutes) -> bool {
        match &self.kind {
            DriverKind::Internal { unavailabilities, .. } => {
                !unavailabilities.iter().any(|range| range.intersects(start, end))
            }
            DriverKind::External { .. } => true,
        }
    }

    /// Checks whether driver has all qualifications required by the activity.
    pub fn is_qualified(&self, activity: &Activity) -> bool {
        activity.qualifications.iter().all(|qualification| self.qualifications.contains(qualification))
    }
}

/// A pool of interchangeable external drivers which share shift count bounds.
#[derive(Clone, Debug)]
pub struct ExternalDriverType {
    /// A type index.
    pub index: usize,
    /// A type name.
    pub name: String,
    /// Minimum amount of shifts the pool should get.
    pub min_shift_count: i64,
    /// Maximum amount of shifts the pool can take.
    pub max_shift_count: i64,
    /// A penalty per shift outside of bounds.
    pub penalty_per_shift: Float,
    /// Slots of member drivers, filled when the problem is created.
    pub drivers: Vec<usize>,
}

impl ExternalDriverType {
    /// Creates a new external driver type without members.
    pub fn new(index: usize, name: &str, min_shift_count: i64, max_shift_count: i64, penalty_per_shift: Float) -> Self {
        Self { index, name: name.to_string(), min_shift_count, max_shift_count, penalty_per_shift, drivers: vec![] }
    }
}
