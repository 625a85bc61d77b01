use crate::{error::SirError, parameters::Parameters, trajectory::Trajectory};

pub struct SirModel {}

impl SirModel {
    /// Integrates the SIR system with forward Euler steps of one day.
    ///
    /// Day t is computed entirely from day t−1: new infections are
    /// `β·S·I/N`, new recoveries `γ·I`. The compartments are not clamped,
    /// so extreme rates (e.g. γ > 1) can push I below zero; S + I + R
    /// stays at N up to floating-point rounding because the per-step
    /// deltas cancel. Pure and deterministic: identical parameters yield
    /// bit-identical trajectories.
    pub fn simulate(parameters: &Parameters) -> Result<Trajectory, SirError> {
        parameters.validate()?;

        let n = parameters.population as f64;
        let initial_infected = parameters.initial_infected as f64;

        let mut trajectory = Trajectory::new(parameters.days);
        trajectory.susceptible[0] = n - initial_infected;
        trajectory.infected[0] = initial_infected;
        trajectory.recovered[0] = 0.0;

        for t in 1..=parameters.days {
            let s = trajectory.susceptible[t - 1];
            let i = trajectory.infected[t - 1];

            let new_infections = parameters.beta * s * i / n;
            let new_recoveries = parameters.gamma * i;

            trajectory.susceptible[t] = s - new_infections;
            trajectory.infected[t] = i + new_infections - new_recoveries;
            trajectory.recovered[t] = trajectory.recovered[t - 1] + new_recoveries;
        }

        Ok(trajectory)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::{error::SirError, model::SirModel, parameters::Parameters};

    fn scenario_a() -> Parameters {
        Parameters {
            beta: 0.3,
            gamma: 0.1,
            population: 1000,
            initial_infected: 10,
            days: 160,
        }
    }

    #[test]
    fn test_initial_conditions() {
        let parameters = scenario_a();
        let trajectory = SirModel::simulate(&parameters).unwrap();
        assert_eq!(trajectory.susceptible[0], 990.0);
        assert_eq!(trajectory.infected[0], 10.0);
        assert_eq!(trajectory.recovered[0], 0.0);
        assert_eq!(trajectory.len(), 161);
    }

    #[test]
    fn test_determinism() {
        let parameters = scenario_a();
        let first = SirModel::simulate(&parameters).unwrap();
        let second = SirModel::simulate(&parameters).unwrap();
        // Bit-identical, not merely approximately equal.
        assert_eq!(first, second);
    }

    #[test]
    fn test_approximate_conservation() {
        let parameters = scenario_a();
        let trajectory = SirModel::simulate(&parameters).unwrap();
        let n = parameters.population as f64;
        for t in 0..trajectory.len() {
            let total =
                trajectory.susceptible[t] + trajectory.infected[t] + trajectory.recovered[t];
            // Only rounding drifts; the update deltas cancel algebraically.
            assert_abs_diff_eq!(total, n, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_recovered_monotone_while_infected_nonnegative() {
        let trajectory = SirModel::simulate(&scenario_a()).unwrap();
        for t in 1..trajectory.len() {
            assert!(trajectory.infected[t - 1] >= 0.0);
            assert!(trajectory.recovered[t] >= trajectory.recovered[t - 1]);
        }
    }

    #[test]
    fn test_epidemic_rises_then_falls() {
        let parameters = scenario_a();
        let trajectory = SirModel::simulate(&parameters).unwrap();
        let peak = trajectory
            .infected
            .iter()
            .cloned()
            .fold(f64::MIN, f64::max);
        assert!(peak > trajectory.infected[0]);
        assert!(*trajectory.infected.last().unwrap() < peak);
        // Susceptibles are depleted by the outbreak.
        assert!(*trajectory.susceptible.last().unwrap() < 990.0);
    }

    #[test]
    fn test_subcritical_epidemic_fades() {
        let parameters = Parameters {
            beta: 0.05,
            gamma: 0.2,
            population: 1000,
            initial_infected: 10,
            days: 50,
        };
        let trajectory = SirModel::simulate(&parameters).unwrap();
        for t in 1..trajectory.len() {
            assert!(trajectory.infected[t] <= trajectory.infected[t - 1]);
        }
        // Few susceptibles were ever infected.
        let total_infected = 1000.0 - trajectory.susceptible[50];
        assert!(total_infected < 50.0);
    }

    #[test]
    fn test_invalid_input_rejected_before_integration() {
        let parameters = Parameters {
            beta: 0.3,
            gamma: 0.1,
            population: 1000,
            initial_infected: 2000,
            days: 50,
        };
        assert!(matches!(
            SirModel::simulate(&parameters),
            Err(SirError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_no_clamping_below_zero() {
        // Recovery faster than the whole compartment per step overshoots;
        // the reference numerics leave the negative value in place.
        let parameters = Parameters {
            gamma: 1.5,
            beta: 0.1,
            population: 1000,
            initial_infected: 10,
            days: 3,
        };
        let trajectory = SirModel::simulate(&parameters).unwrap();
        assert!(trajectory.infected[1] < 0.0);
    }

    #[test]
    fn test_one_day_horizon() {
        let parameters = Parameters {
            days: 1,
            ..scenario_a()
        };
        let trajectory = SirModel::simulate(&parameters).unwrap();
        assert_eq!(trajectory.len(), 2);
        // dS = -0.3 * 990 * 10 / 1000 = -2.97, dR = 0.1 * 10 = 1.0
        assert_abs_diff_eq!(trajectory.susceptible[1], 990.0 - 2.97, epsilon = 1e-12);
        assert_abs_diff_eq!(trajectory.infected[1], 10.0 + 2.97 - 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(trajectory.recovered[1], 1.0, epsilon = 1e-12);
    }
}
