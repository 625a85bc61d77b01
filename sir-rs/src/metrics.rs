use crate::{parameters::Parameters, trajectory::Trajectory};

/// Summary statistics derived from a completed [`Trajectory`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Basic reproduction number, β/γ.
    pub r0: f64,
    /// Largest infected compartment size over the run.
    pub peak_infected: f64,
    /// Day on which the infected compartment peaks; earliest day on ties.
    pub peak_day: usize,
    /// Susceptible deficit at the end of the horizon, N − S(T).
    pub total_infected: f64,
    /// `total_infected` as a percentage of the population.
    pub percent_infected: f64,
}

impl Metrics {
    pub fn from_trajectory(parameters: &Parameters, trajectory: &Trajectory) -> Metrics {
        let mut peak_day = 0;
        let mut peak_infected = trajectory.infected[0];
        // Strict comparison keeps the first occurrence on ties, so a run
        // that declines from day 0 peaks at day 0.
        for (day, &infected) in trajectory.infected.iter().enumerate() {
            if infected > peak_infected {
                peak_day = day;
                peak_infected = infected;
            }
        }

        let n = parameters.population as f64;
        let total_infected = n - trajectory.susceptible[trajectory.len() - 1];

        Metrics {
            r0: parameters.beta / parameters.gamma,
            peak_infected,
            peak_day,
            total_infected,
            percent_infected: total_infected / n * 100.0,
        }
    }
}
