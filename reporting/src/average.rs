use rayon::prelude::*;
use tracing::warn;

use crate::error::ReportError;

/// Per-step mean across trials.
///
/// Trials of unequal length are truncated to the shortest one.
pub fn average(histories: &[Vec<f64>]) -> Result<Vec<f64>, ReportError> {
    let steps = histories
        .iter()
        .map(Vec::len)
        .min()
        .ok_or(ReportError::NoHistories)?;

    if let Some(trial) = histories.iter().position(Vec::is_empty) {
        return Err(ReportError::EmptyTrial(trial));
    }

    if histories.iter().any(|history| history.len() != steps) {
        warn!(
            "Reward histories differ in length, averaging the first {} steps",
            steps
        );
    }

    let trials = histories.len() as f64;

    Ok((0..steps)
        .into_par_iter()
        .map(|step| histories.iter().map(|history| history[step]).sum::<f64>() / trials)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_each_step() {
        let histories = vec![vec![0., 1., 2., 3.], vec![2., 3., 4., 5.], vec![1., 2., 3., 4.]];

        assert_eq!(average(&histories).unwrap(), vec![1., 2., 3., 4.]);
    }

    #[test]
    fn single_trial_is_its_own_average() {
        let histories = vec![vec![0., 0., 1., 1.]];

        assert_eq!(average(&histories).unwrap(), histories[0]);
    }

    #[test]
    fn truncates_to_shortest_trial() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let histories = vec![vec![1., 2., 3.], vec![3., 4.]];

        assert_eq!(average(&histories).unwrap(), vec![2., 3.]);
    }

    #[test]
    fn rejects_missing_data() {
        assert!(matches!(average(&[]), Err(ReportError::NoHistories)));
        assert!(matches!(
            average(&[vec![1.], vec![]]),
            Err(ReportError::EmptyTrial(1))
        ));
    }
}
