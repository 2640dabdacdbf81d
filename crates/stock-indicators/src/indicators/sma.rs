//! Simple moving average

/// Mean of the last `window` values
///
/// Returns `None` when `window` is zero or fewer than `window` values exist.
/// The trailing slice is summed directly so the result does not depend on
/// anything before the window.
pub fn simple_moving_average(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_of_trailing_window() {
        let values = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];
        assert_eq!(simple_moving_average(&values, 5), Some(14.0));
        assert_eq!(simple_moving_average(&values, 1), Some(16.0));
    }

    #[test]
    fn sma_window_equal_to_length_is_full_mean() {
        let values = [3.0, 9.0, 4.5, 7.5];
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert_eq!(simple_moving_average(&values, values.len()), Some(mean));
    }

    #[test]
    fn sma_undefined_when_short() {
        assert_eq!(simple_moving_average(&[1.0, 2.0], 3), None);
        assert_eq!(simple_moving_average(&[], 1), None);
    }

    #[test]
    fn sma_zero_window() {
        assert_eq!(simple_moving_average(&[1.0, 2.0], 0), None);
    }

    #[test]
    fn sma_linear_uptrend() {
        let closes: Vec<f64> = (100..=120).map(f64::from).collect();
        assert_eq!(simple_moving_average(&closes, 20), Some(110.5));
    }
}
