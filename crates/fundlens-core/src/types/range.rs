//! Time-range tokens and the alignment window they resolve to.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::Date;
use crate::error::CoreError;

/// Look-back period selected for a performance comparison.
///
/// Each token maps deterministically to a cutoff date relative to "now".
/// Unknown tokens resolve to [`RangeToken::OneYear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeToken {
    /// One calendar month (`1M`).
    OneMonth,
    /// Six calendar months (`6M`).
    SixMonths,
    /// One calendar year (`1Y`).
    #[default]
    OneYear,
    /// Three calendar years (`3Y`).
    ThreeYears,
    /// Five calendar years (`5Y`).
    FiveYears,
    /// No lower bound (`ALL`).
    All,
}

impl RangeToken {
    /// All tokens in display order.
    pub const ALL: [RangeToken; 6] = [
        RangeToken::OneMonth,
        RangeToken::SixMonths,
        RangeToken::OneYear,
        RangeToken::ThreeYears,
        RangeToken::FiveYears,
        RangeToken::All,
    ];

    /// Returns the wire token (`1M`, `6M`, `1Y`, `3Y`, `5Y`, `ALL`).
    #[must_use]
    pub fn token(&self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::ThreeYears => "3Y",
            Self::FiveYears => "5Y",
            Self::All => "ALL",
        }
    }

    /// Resolves a token leniently: unrecognised input falls back to `1Y`.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }

    /// Returns the cutoff date for this range.
    ///
    /// Points dated strictly before the cutoff are outside the window.
    /// Month and year subtraction clamp to the last valid day of the
    /// target month (see [`Date::add_months`]).
    #[must_use]
    pub fn cutoff(&self, now: Date) -> Date {
        let shifted = match self {
            Self::OneMonth => now.add_months(-1),
            Self::SixMonths => now.add_months(-6),
            Self::OneYear => now.add_years(-1),
            Self::ThreeYears => now.add_years(-3),
            Self::FiveYears => now.add_years(-5),
            Self::All => return Date::sentinel(),
        };

        // Only fails at the edge of chrono's representable range.
        shifted.unwrap_or_else(|_| Date::sentinel())
    }

    /// Returns the alignment window `[cutoff, now]`.
    #[must_use]
    pub fn window(&self, now: Date) -> AlignmentWindow {
        AlignmentWindow {
            cutoff: self.cutoff(now),
            end: now,
        }
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for RangeToken {
    type Err = CoreError;

    /// Strict, case-insensitive parse. Use [`RangeToken::from_token`] for the
    /// lenient behaviour.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "1M" => Ok(Self::OneMonth),
            "6M" => Ok(Self::SixMonths),
            "1Y" => Ok(Self::OneYear),
            "3Y" => Ok(Self::ThreeYears),
            "5Y" => Ok(Self::FiveYears),
            "ALL" => Ok(Self::All),
            _ => Err(CoreError::invalid_range(s)),
        }
    }
}

impl Serialize for RangeToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for RangeToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::from_token(&token))
    }
}

/// Inclusive date range `[cutoff, end]` used to filter observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentWindow {
    /// Earliest date kept.
    pub cutoff: Date,
    /// Latest date kept ("now").
    pub end: Date,
}

impl AlignmentWindow {
    /// Returns true if `date` lies within `[cutoff, end]`.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.cutoff <= date && date <= self.end
    }
}
