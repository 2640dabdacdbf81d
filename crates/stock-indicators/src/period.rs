//! Lookback periods such as `3mo`, as accepted by the research tools

use crate::error::StockError;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lookback window for historical data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Period {
    OneDay,
    FiveDays,
    OneMonth,
    #[default]
    ThreeMonths,
    SixMonths,
    OneYear,
    TwoYears,
    FiveYears,
    TenYears,
    YearToDate,
    Max,
}

impl Period {
    /// Every supported period, shortest first
    pub const ALL: [Period; 11] = [
        Period::OneDay,
        Period::FiveDays,
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
        Period::TwoYears,
        Period::FiveYears,
        Period::TenYears,
        Period::YearToDate,
        Period::Max,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::FiveDays => "5d",
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
            Period::TwoYears => "2y",
            Period::FiveYears => "5y",
            Period::TenYears => "10y",
            Period::YearToDate => "ytd",
            Period::Max => "max",
        }
    }

    /// First date excluded from the window ending at `end`
    ///
    /// Bars dated strictly after the returned date fall inside the period.
    pub fn start_date(self, end: NaiveDate) -> NaiveDate {
        let days = match self {
            Period::OneDay => 1,
            Period::FiveDays => 5,
            Period::OneMonth => 30,
            Period::ThreeMonths => 90,
            Period::SixMonths => 180,
            Period::OneYear => 365,
            Period::TwoYears => 730,
            Period::FiveYears => 1825,
            Period::TenYears => 3650,
            Period::YearToDate => {
                // Dec 31 of the previous year, so Jan 1 is included
                return NaiveDate::from_ymd_opt(end.year(), 1, 1)
                    .and_then(|jan1| jan1.pred_opt())
                    .unwrap_or(NaiveDate::MIN);
            }
            Period::Max => 36_500,
        };
        end.checked_sub_signed(Duration::days(days))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == needle)
            .ok_or_else(|| StockError::InvalidPeriod(s.to_string()))
    }
}

impl TryFrom<String> for Period {
    type Error = StockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_round_trip() {
        for period in Period::ALL {
            assert_eq!(period.as_str().parse::<Period>().unwrap(), period);
        }
        assert_eq!(" 3MO ".parse::<Period>().unwrap(), Period::ThreeMonths);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "2w".parse::<Period>().unwrap_err();
        assert!(matches!(err, StockError::InvalidPeriod(ref p) if p == "2w"));
    }

    #[test]
    fn test_default_is_three_months() {
        assert_eq!(Period::default(), Period::ThreeMonths);
        assert_eq!(Period::default().to_string(), "3mo");
    }

    #[test]
    fn test_start_date() {
        let end = date(2024, 6, 30);
        assert_eq!(Period::OneDay.start_date(end), date(2024, 6, 29));
        assert_eq!(Period::OneMonth.start_date(end), date(2024, 5, 31));
        assert_eq!(Period::ThreeMonths.start_date(end), date(2024, 4, 1));
        assert_eq!(Period::YearToDate.start_date(end), date(2023, 12, 31));
    }

    #[test]
    fn test_serde_uses_period_strings() {
        let json = serde_json::to_string(&Period::SixMonths).unwrap();
        assert_eq!(json, "\"6mo\"");
        let parsed: Period = serde_json::from_str("\"1y\"").unwrap();
        assert_eq!(parsed, Period::OneYear);
        assert!(serde_json::from_str::<Period>("\"week\"").is_err());
    }
}
