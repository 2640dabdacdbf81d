//! Latest-bar trend classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-valued trend signal
///
/// There is no neutral state: anything that is not a clean
/// `close > short SMA > long SMA` ordering is `Bearish`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendSignal {
    Bullish,
    Bearish,
}

impl TrendSignal {
    pub fn as_str(self) -> &'static str {
        match self {
            TrendSignal::Bullish => "bullish",
            TrendSignal::Bearish => "bearish",
        }
    }
}

impl fmt::Display for TrendSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify from the latest close and the two moving averages
///
/// An undefined average counts as not bullish.
pub fn classify_trend(close: f64, sma_short: Option<f64>, sma_long: Option<f64>) -> TrendSignal {
    match (sma_short, sma_long) {
        (Some(short), Some(long)) if close > short && short > long => TrendSignal::Bullish,
        _ => TrendSignal::Bearish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullish_requires_strict_ordering() {
        assert_eq!(classify_trend(110.0, Some(105.0), Some(100.0)), TrendSignal::Bullish);
        assert_eq!(classify_trend(105.0, Some(105.0), Some(100.0)), TrendSignal::Bearish);
        assert_eq!(classify_trend(110.0, Some(100.0), Some(100.0)), TrendSignal::Bearish);
        assert_eq!(classify_trend(110.0, Some(100.0), Some(105.0)), TrendSignal::Bearish);
        assert_eq!(classify_trend(90.0, Some(100.0), Some(95.0)), TrendSignal::Bearish);
    }

    #[test]
    fn undefined_average_is_bearish() {
        assert_eq!(classify_trend(110.0, None, Some(100.0)), TrendSignal::Bearish);
        assert_eq!(classify_trend(110.0, Some(105.0), None), TrendSignal::Bearish);
        assert_eq!(classify_trend(110.0, None, None), TrendSignal::Bearish);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_value(TrendSignal::Bullish).unwrap(), "bullish");
        assert_eq!(TrendSignal::Bearish.to_string(), "bearish");
    }
}
