use crate::utils::{Float, GenericResult, Minutes};

/// A square matrix of travel durations (minutes) and distances (kilometers) between locations.
#[derive(Clone, Debug)]
pub struct TravelMatrix {
    size: usize,
    durations: Vec<Minutes>,
    distances: Vec<Float>,
}

impl TravelMatrix {
    /// Creates a new instance of `TravelMatrix` from row-major data.
    pub fn new(size: usize, durations: Vec<Minutes>, distances: Vec<Float>) -> GenericResult<Self> {
        if durations.len() != size * size || distances.len() != size * size {
            return Err(format!(
                "travel matrix of size {size} expects {} values, got {} durations and {} distances",
                size * size,
                durations.len(),
                distances.len()
            )
            .into());
        }

        if durations.iter().any(|&duration| duration < 0) || distances.iter().any(|&distance| distance < 0.) {
            return Err("travel matrix cannot have negative values".into());
        }

        Ok(Self { size, durations, distances })
    }

    /// Creates a travel matrix where every location is reachable instantly.
    pub fn empty(size: usize) -> Self {
        Self { size, durations: vec![0; size * size], distances: vec![0.; size * size] }
    }

    /// Returns amount of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns travel duration between two locations.
    pub fn duration(&self, from: usize, to: usize) -> Minutes {
        self.durations[from * self.size + to]
    }

    /// Returns travel distance between two locations.
    pub fn distance(&self, from: usize, to: usize) -> Float {
        self.distances[from * self.size + to]
    }
}
