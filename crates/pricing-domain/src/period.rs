//! Calendar facts about the current billing month.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days in the billing month and days left in it, today included.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillingPeriod {
    pub total_days_in_month: u32,
    pub days_remaining: u32,
}

impl BillingPeriod {
    pub fn new(total_days_in_month: u32, days_remaining: u32) -> Result<Self, BillingPeriodError> {
        if !(28..=31).contains(&total_days_in_month) {
            return Err(BillingPeriodError::MonthLength(total_days_in_month));
        }
        if days_remaining == 0 || days_remaining > total_days_in_month {
            return Err(BillingPeriodError::DaysRemaining {
                days_remaining,
                total_days_in_month,
            });
        }
        Ok(Self {
            total_days_in_month,
            days_remaining,
        })
    }

    /// Resolves the period containing `today`. The last day of a month leaves one day.
    pub fn for_date(today: NaiveDate) -> Self {
        let total_days_in_month = days_in_month(today.year(), today.month());
        Self {
            total_days_in_month,
            days_remaining: total_days_in_month - today.day() + 1,
        }
    }

    pub fn is_full_month(&self) -> bool {
        self.days_remaining == self.total_days_in_month
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} days remaining",
            self.days_remaining, self.total_days_in_month
        )
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first_next| (first_next - Duration::days(1)).day())
        .unwrap_or(31)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`BillingPeriod`] values.
pub enum BillingPeriodError {
    MonthLength(u32),
    DaysRemaining {
        days_remaining: u32,
        total_days_in_month: u32,
    },
}

impl fmt::Display for BillingPeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingPeriodError::MonthLength(days) => {
                write!(f, "a month has 28 to 31 days, got {days}")
            }
            BillingPeriodError::DaysRemaining {
                days_remaining,
                total_days_in_month,
            } => write!(
                f,
                "days remaining must be between 1 and {total_days_in_month}, got {days_remaining}"
            ),
        }
    }
}

impl std::error::Error for BillingPeriodError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_today_as_remaining() {
        let first = BillingPeriod::for_date(date(2025, 4, 1));
        assert_eq!(first.total_days_in_month, 30);
        assert_eq!(first.days_remaining, 30);
        assert!(first.is_full_month());

        let last = BillingPeriod::for_date(date(2025, 4, 30));
        assert_eq!(last.days_remaining, 1);

        let mid = BillingPeriod::for_date(date(2025, 1, 20));
        assert_eq!(mid.total_days_in_month, 31);
        assert_eq!(mid.days_remaining, 12);
    }

    #[test]
    fn handles_february_and_december() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(BillingPeriod::for_date(date(2024, 2, 29)).days_remaining, 1);
    }

    #[test]
    fn validates_parts() {
        assert!(BillingPeriod::new(30, 30).is_ok());
        assert_eq!(
            BillingPeriod::new(32, 1),
            Err(BillingPeriodError::MonthLength(32))
        );
        assert!(BillingPeriod::new(30, 0).is_err());
        assert!(BillingPeriod::new(28, 29).is_err());
    }
}
