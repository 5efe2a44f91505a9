pub mod check;
pub mod lookup;
pub mod manual;
pub mod search;
pub mod tables;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use fraiche_core::error::FraicheError;

/// Parse a YYYY-MM-DD argument into a UTC midnight timestamp.
pub fn parse_date(s: &str) -> Result<DateTime<Utc>, FraicheError> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| FraicheError::InvalidDate(s.to_string()))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2025-06-01").is_ok());
        assert!(parse_date("01/06/2025").is_err());
        assert!(parse_date("tomorrow").is_err());
    }
}
