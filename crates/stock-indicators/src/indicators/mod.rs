//! Indicator engine
//!
//! Pure, synchronous computation over a daily [`Series`]: trailing simple
//! moving averages, a simple rolling RSI and a latest-bar trend signal.
//! Nothing here performs I/O or logs; the same input always yields the
//! same [`IndicatorResult`], so callers may run it from any thread.

pub mod rsi;
pub mod sma;
pub mod trend;

pub use rsi::relative_strength_index;
pub use sma::simple_moving_average;
pub use trend::{TrendSignal, classify_trend};

use crate::error::{IndicatorError, SeriesDefect, StockError};
use crate::series::Series;
use serde::{Deserialize, Serialize};

/// Window lengths used by [`compute_indicators`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorWindow {
    /// Short SMA length
    pub short: usize,
    /// Long SMA length
    pub long: usize,
    /// Number of close-to-close changes averaged by the RSI
    pub rsi_lookback: usize,
}

impl Default for IndicatorWindow {
    fn default() -> Self {
        Self {
            short: 20,
            long: 50,
            rsi_lookback: 14,
        }
    }
}

impl IndicatorWindow {
    pub fn new(short: usize, long: usize, rsi_lookback: usize) -> Self {
        Self {
            short,
            long,
            rsi_lookback,
        }
    }

    /// All lengths must be at least one and `short` must be below `long`
    pub fn validate(&self) -> Result<(), StockError> {
        if self.short == 0 || self.long == 0 || self.rsi_lookback == 0 {
            return Err(StockError::ConfigError(format!(
                "indicator windows must be at least 1 (short={}, long={}, rsi={})",
                self.short, self.long, self.rsi_lookback
            )));
        }
        if self.short >= self.long {
            return Err(StockError::ConfigError(format!(
                "short window ({}) must be shorter than long window ({})",
                self.short, self.long
            )));
        }
        Ok(())
    }

    /// Bars needed for every indicator to be defined
    pub fn required_bars(&self) -> usize {
        self.short
            .max(self.long)
            .max(self.rsi_lookback.saturating_add(1))
    }
}

/// Indicators for the latest bar of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub symbol: String,
    /// Last close, rounded to cents
    pub current_price: f64,
    /// `None` when the series is shorter than `window.short`
    pub sma_short: Option<f64>,
    /// `None` when the series is shorter than `window.long`
    pub sma_long: Option<f64>,
    /// `None` with fewer than `window.rsi_lookback + 1` bars or a flat window
    pub rsi: Option<f64>,
    /// Volume of the last bar
    pub volume: u64,
    pub trend_signal: TrendSignal,
    /// Windows the values were computed with
    pub window: IndicatorWindow,
}

impl IndicatorResult {
    /// True when every indicator had enough history
    pub fn is_complete(&self) -> bool {
        self.sma_short.is_some() && self.sma_long.is_some() && self.rsi.is_some()
    }
}

/// Round to two decimal places, ties to even
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Check that a series is non-empty, strictly increasing by date and has
/// positive finite closes
pub fn validate_series(series: &Series) -> Result<(), IndicatorError> {
    if series.is_empty() {
        return Err(IndicatorError::NoData {
            symbol: series.symbol.clone(),
        });
    }

    let invalid = |index: usize, defect: SeriesDefect| IndicatorError::InvalidSeries {
        symbol: series.symbol.clone(),
        index,
        defect,
    };

    for (index, bar) in series.bars.iter().enumerate() {
        if !bar.close.is_finite() {
            return Err(invalid(index, SeriesDefect::NonFiniteClose));
        }
        if bar.close <= 0.0 {
            return Err(invalid(index, SeriesDefect::NonPositiveClose(bar.close)));
        }
        if index > 0 {
            let previous = series.bars[index - 1].date;
            if bar.date == previous {
                return Err(invalid(index, SeriesDefect::DuplicateDate(bar.date)));
            }
            if bar.date < previous {
                return Err(invalid(
                    index,
                    SeriesDefect::OutOfOrderDate {
                        previous,
                        current: bar.date,
                    },
                ));
            }
        }
    }
    Ok(())
}

/// Compute indicators for the latest bar of `series`
///
/// Fails with [`IndicatorError::NoData`] on an empty series and
/// [`IndicatorError::InvalidSeries`] on malformed input; never returns a
/// partially populated result. Indicators lacking history are `None`.
pub fn compute_indicators(
    series: &Series,
    window: &IndicatorWindow,
) -> Result<IndicatorResult, IndicatorError> {
    validate_series(series)?;
    let Some(last) = series.last() else {
        return Err(IndicatorError::NoData {
            symbol: series.symbol.clone(),
        });
    };

    let closes = series.closes();
    let sma_short = simple_moving_average(&closes, window.short);
    let sma_long = simple_moving_average(&closes, window.long);
    let rsi = relative_strength_index(&closes, window.rsi_lookback);

    // Ordering is decided on unrounded values
    let trend_signal = classify_trend(last.close, sma_short, sma_long);

    Ok(IndicatorResult {
        symbol: series.symbol.clone(),
        current_price: round_to_cents(last.close),
        sma_short: sma_short.map(round_to_cents),
        sma_long: sma_long.map(round_to_cents),
        rsi: rsi.map(round_to_cents),
        volume: last.volume,
        trend_signal,
        window: *window,
    })
}
