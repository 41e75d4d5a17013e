//! Statistical utility functions.
//!
//! Undefined statistics are `None` rather than `NaN`, so callers have to
//! handle "not enough data" explicitly.

/// Calculate the mean of a slice.
///
/// # Example
/// ```
/// use climate_anomaly::utils::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Calculate the variance of a slice (sample variance with n-1 denominator).
pub fn variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    Some(sum_sq / (values.len() - 1) as f64)
}

/// Calculate the sample standard deviation of a slice.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

/// Smallest value of a slice.
pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Largest value of a slice.
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_calculates_correctly() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0, epsilon = 1e-10);
        assert_relative_eq!(mean(&[10.0]).unwrap(), 10.0, epsilon = 1e-10);
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn variance_calculates_correctly() {
        // Sample variance of [1, 2, 3, 4, 5] = 2.5
        assert_relative_eq!(
            variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(),
            2.5,
            epsilon = 1e-10
        );
        assert!(variance(&[1.0]).is_none());
        assert!(variance(&[]).is_none());
    }

    #[test]
    fn std_dev_of_constant_is_zero() {
        assert_eq!(std_dev(&[4.0, 4.0, 4.0]), Some(0.0));
    }

    #[test]
    fn std_dev_calculates_correctly() {
        assert_relative_eq!(
            std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap(),
            (32.0_f64 / 7.0).sqrt(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn min_max_of_slice() {
        let values = [3.0, -1.5, 8.25, 0.0];
        assert_eq!(min(&values), Some(-1.5));
        assert_eq!(max(&values), Some(8.25));
        assert!(min(&[]).is_none());
        assert!(max(&[]).is_none());
    }
}
