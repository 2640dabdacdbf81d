//! Relative Strength Index, simple rolling variant
//!
//! Average gain and average loss are plain means of the last `lookback`
//! close-to-close changes. This is not Wilder's exponential smoothing: the
//! value only depends on the last `lookback + 1` closes.

/// RSI at the last value of `closes`
///
/// Returns `None` when `lookback` is zero, fewer than `lookback + 1` closes
/// exist, or the window had neither gains nor losses.
pub fn relative_strength_index(closes: &[f64], lookback: usize) -> Option<f64> {
    if lookback == 0 || lookback >= closes.len() {
        return None;
    }

    let window = &closes[closes.len() - lookback - 1..];
    let (gain_sum, loss_sum) = window
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .fold((0.0_f64, 0.0_f64), |(gain, loss), delta| {
            if delta > 0.0 {
                (gain + delta, loss)
            } else if delta < 0.0 {
                (gain, loss - delta)
            } else {
                (gain, loss)
            }
        });

    let n = lookback as f64;
    rsi_from_averages(gain_sum / n, loss_sum / n)
}

/// Turn average gain / average loss into an RSI in [0, 100]
///
/// - no gains and no losses: `None` (flat window carries no signal)
/// - no losses: `100`
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        return (avg_gain > 0.0).then_some(100.0);
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}
