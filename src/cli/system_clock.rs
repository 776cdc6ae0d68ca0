use chrono::{DateTime, NaiveDate, Utc};

use pricing_core::{Clock, FixedClock};

use crate::errors::CliError;

const TODAY_ENV: &str = "GYM_PRICING_TODAY";

/// Real-time clock backed by the local calendar date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// `GYM_PRICING_TODAY=YYYY-MM-DD` pins the session date; otherwise the system clock is used.
pub fn clock_from_env() -> Result<Box<dyn Clock>, CliError> {
    match std::env::var(TODAY_ENV) {
        Ok(raw) if !raw.trim().is_empty() => {
            let date = parse_today(&raw)?;
            tracing::debug!(%date, "using pinned session date");
            Ok(Box::new(FixedClock::new(date)))
        }
        _ => Ok(Box::new(SystemClock)),
    }
}

fn parse_today(raw: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::Input(format!(
            "{TODAY_ENV} must be a YYYY-MM-DD date, got `{}`",
            raw.trim()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pinned_dates() {
        assert_eq!(
            parse_today(" 2024-02-10 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
        );
        assert!(parse_today("10/02/2024").is_err());
    }
}
