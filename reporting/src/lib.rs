//! Figures over reward histories collected by an external driver loop.
//!
//! Each history is one trial: the reward observed at every step. Trials of
//! the same policy are averaged step by step and drawn next to the raw runs.

pub use average::average;
pub use error::ReportError;
pub use plot::{plot_layout, plot_results, plot_summary};
pub use policy::PolicyLabel;

mod average;
mod error;
mod plot;
mod policy;

#[cfg(test)]
mod tests {
    use super::*;
    use gridworld_environment_grid::{Action, Environment, GridConfiguration, GridWorld};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeMap;

    fn cumulative_rewards(seed: u64, steps: usize) -> Vec<f64> {
        let mut env = GridWorld::seeded(
            GridConfiguration {
                goal_location: (2, 2),
                ..Default::default()
            },
            seed,
        )
        .unwrap();
        let mut policy = StdRng::seed_from_u64(seed + 100);
        let mut total = 0.;

        (0..steps)
            .map(|_| {
                let intended: Action = policy.gen();
                env.step(intended);
                total += env.reward();

                if env.done() {
                    env.reset();
                }

                total
            })
            .collect()
    }

    #[test]
    fn driver_histories_feed_the_summary() {
        let trials: Vec<Vec<f64>> = (0..4).map(|seed| cumulative_rewards(seed, 200)).collect();
        let mean = average(&trials).unwrap();

        assert_eq!(mean.len(), 200);
        assert!(mean.windows(2).all(|pair| pair[1] >= pair[0]));
        assert_eq!(trials, (0..4).map(|seed| cumulative_rewards(seed, 200)).collect::<Vec<_>>());

        let dir = tempfile::tempdir().unwrap();
        let mut by_policy = BTreeMap::new();
        by_policy.insert("true_random".parse::<PolicyLabel>().unwrap(), trials);

        assert!(plot_summary(&by_policy, dir.path()).unwrap().exists());
    }
}
