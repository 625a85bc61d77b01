/// Compartment sizes for every day of a run, index = day.
///
/// Each vector has `days + 1` entries so that index 0 holds the initial
/// conditions. Owned by the run that produced it and not mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub susceptible: Vec<f64>,
    pub infected: Vec<f64>,
    pub recovered: Vec<f64>,
}

impl Trajectory {
    pub fn new(days: usize) -> Trajectory {
        Trajectory {
            susceptible: vec![0.0; days + 1],
            infected: vec![0.0; days + 1],
            recovered: vec![0.0; days + 1],
        }
    }

    /// Number of recorded days, including day 0.
    pub fn len(&self) -> usize {
        self.infected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_allocates_days_plus_one() {
        let trajectory = Trajectory::new(160);
        assert_eq!(trajectory.len(), 161);
        assert_eq!(trajectory.susceptible.len(), 161);
        assert_eq!(trajectory.recovered.len(), 161);
        assert!(!trajectory.is_empty());
    }
}
