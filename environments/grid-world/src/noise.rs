use std::fmt;

use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::WeightedAliasIndex;

use crate::action::Action;
use crate::error::GridError;

/// Probabilities of executing the intended move and each of its two orthogonal slips.
pub const TRANSITION_PROBABILITIES: [f64; 3] = [0.8, 0.1, 0.1];

/// Perturbs intended actions into executed ones.
#[derive(Clone)]
pub struct TransitionNoise {
    distribution: WeightedAliasIndex<f64>,
}

impl TransitionNoise {
    pub fn new() -> Result<Self, GridError> {
        let distribution = WeightedAliasIndex::new(TRANSITION_PROBABILITIES.to_vec())?;

        Ok(TransitionNoise { distribution })
    }

    /// Ordered executed actions for an intent, the intended one first.
    pub fn outcomes(intended: Action) -> [Action; 3] {
        let [first, second] = intended.orthogonal();

        [intended, first, second]
    }

    /// Outcomes paired with the probability of each.
    pub fn distribution(intended: Action) -> [(Action, f64); 3] {
        let outcomes = TransitionNoise::outcomes(intended);

        [
            (outcomes[0], TRANSITION_PROBABILITIES[0]),
            (outcomes[1], TRANSITION_PROBABILITIES[1]),
            (outcomes[2], TRANSITION_PROBABILITIES[2]),
        ]
    }

    pub fn sample<R: Rng + ?Sized>(&self, intended: Action, rng: &mut R) -> Action {
        TransitionNoise::outcomes(intended)[self.distribution.sample(rng)]
    }
}

impl fmt::Debug for TransitionNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionNoise")
            .field("probabilities", &TRANSITION_PROBABILITIES)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn table_matches_fixed_ordering() {
        use Action::*;

        assert_eq!(TransitionNoise::outcomes(Left), [Left, Up, Down]);
        assert_eq!(TransitionNoise::outcomes(Right), [Right, Up, Down]);
        assert_eq!(TransitionNoise::outcomes(Up), [Up, Left, Right]);
        assert_eq!(TransitionNoise::outcomes(Down), [Down, Left, Right]);
    }

    #[test]
    fn probabilities_sum_to_one() {
        for action in Action::ALL.iter() {
            let distribution = TransitionNoise::distribution(*action);
            let total: f64 = distribution.iter().map(|(_, p)| p).sum();

            assert_eq!(distribution[0], (*action, 0.8));
            assert_eq!(distribution[1].1, 0.1);
            assert_eq!(distribution[2].1, 0.1);
            assert!((total - 1.).abs() < 1e-12);
        }
    }

    #[test]
    fn sampled_frequencies_follow_probabilities() {
        let noise = TransitionNoise::new().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let samples = 100_000;

        for action in Action::ALL.iter() {
            let outcomes = TransitionNoise::outcomes(*action);
            let mut counts = [0usize; 3];

            for _ in 0..samples {
                let executed = noise.sample(*action, &mut rng);
                let index = outcomes.iter().position(|a| *a == executed).unwrap();
                counts[index] += 1;
            }

            for (count, probability) in counts.iter().zip(TRANSITION_PROBABILITIES.iter()) {
                let frequency = *count as f64 / samples as f64;
                assert!(
                    (frequency - probability).abs() < 0.01,
                    "{} sampled {} instead of {}",
                    action,
                    frequency,
                    probability
                );
            }
        }
    }

    #[test]
    fn same_seed_same_samples() {
        let noise = TransitionNoise::new().unwrap();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let a: Vec<Action> = (0..200).map(|_| noise.sample(Action::Up, &mut rng_a)).collect();
        let b: Vec<Action> = (0..200).map(|_| noise.sample(Action::Up, &mut rng_b)).collect();

        assert_eq!(a, b);
    }
}
