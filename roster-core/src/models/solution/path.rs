#[cfg(test)]
#[path = "../../../tests/unit/models/solution/path_test.rs"]
mod path_test;

/// Keeps per driver ordered views of an assignment together with a lookup from activity
/// to its position in the driver path.
#[derive(Clone, Debug)]
pub struct DriverPaths {
    paths: Vec<Vec<usize>>,
    positions: Vec<usize>,
}

impl DriverPaths {
    /// Creates driver paths from an assignment which maps activity index to driver slot.
    pub fn new(driver_count: usize, assignment: &[usize]) -> Self {
        let mut paths = vec![Vec::new(); driver_count];
        let positions = assignment
            .iter()
            .enumerate()
            .map(|(activity, &slot)| {
                let path = &mut paths[slot];
                path.push(activity);
                path.len() - 1
            })
            .collect();

        Self { paths, positions }
    }

    /// Returns activities of the driver ordered by start time.
    pub fn path(&self, slot: usize) -> &[usize] {
        self.paths[slot].as_slice()
    }

    /// Returns position of the activity in its driver path.
    pub fn position(&self, activity: usize) -> usize {
        self.positions[activity]
    }

    /// Returns position where the activity would be inserted into the driver path.
    pub fn insert_position(&self, slot: usize, activity: usize) -> usize {
        self.paths[slot].partition_point(|&other| other < activity)
    }

    /// Moves the activity from one driver path to another, keeping position lookup in sync.
    pub fn reassign(&mut self, activity: usize, old_slot: usize, new_slot: usize) {
        let Self { paths, positions } = self;

        let old_position = positions[activity];
        let old_path = &mut paths[old_slot];
        old_path.remove(old_position);
        old_path[old_position..].iter().for_each(|&other| positions[other] -= 1);

        let new_path = &mut paths[new_slot];
        let new_position = new_path.partition_point(|&other| other < activity);
        new_path.insert(new_position, activity);
        new_path[new_position + 1..].iter().for_each(|&other| positions[other] += 1);
        positions[activity] = new_position;
    }
}
