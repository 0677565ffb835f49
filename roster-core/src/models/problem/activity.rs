use crate::utils::Minutes;

/// Represents a single schedulable duty, e.g. a train driving leg, which should be assigned to a driver.
#[derive(Clone, Debug)]
pub struct Activity {
    /// A global sequence index, activities are sorted by start time.
    pub index: usize,
    /// An identifier of the duty this activity belongs to.
    pub duty_id: String,
    /// An optional project name used to estimate disruption costs.
    pub project: Option<String>,
    /// Start time.
    pub start_time: Minutes,
    /// End time.
    pub end_time: Minutes,
    /// A travel matrix index of the start location.
    pub start_location: usize,
    /// A travel matrix index of the end location.
    pub end_location: usize,
    /// Qualifications required from a driver.
    pub qualifications: Vec<String>,
    /// An optional id which links activities worked as one continuous route.
    pub shared_route: Option<usize>,
    /// True when this is a driving activity which is more likely to be delayed.
    pub is_driving: bool,
}

impl Activity {
    /// Returns planned duration of the activity.
    pub fn duration(&self) -> Minutes {
        self.end_time - self.start_time
    }

    /// Checks whether time windows of two activities overlap.
    pub fn overlaps(&self, other: &Activity) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}
