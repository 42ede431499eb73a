//! Model-fit metrics.

/// Coefficient of determination of `predicted` against `actual`.
///
/// Returns `None` when the inputs are unusable: mismatched lengths, fewer
/// than two observations, or zero variance in `actual`.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> Option<f64> {
    if actual.len() != predicted.len() || actual.len() < 2 {
        return None;
    }
    let mean = actual.iter().sum::<f64>() / actual.len() as f64;
    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        return None;
    }
    let ss_res: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    Some(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_fit() {
        let actual = [0.2, 0.4, 0.6];
        assert_relative_eq!(r_squared(&actual, &actual).unwrap(), 1.0);
    }

    #[test]
    fn test_mean_prediction_scores_zero() {
        let actual = [1.0, 2.0, 3.0];
        let predicted = [2.0, 2.0, 2.0];
        assert_relative_eq!(r_squared(&actual, &predicted).unwrap(), 0.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(r_squared(&[1.0], &[1.0]).is_none());
        assert!(r_squared(&[1.0, 2.0], &[1.0]).is_none());
        // Zero variance in the target.
        assert!(r_squared(&[2.0, 2.0], &[1.0, 3.0]).is_none());
    }
}
