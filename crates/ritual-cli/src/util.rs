use anyhow::Result;
use chrono::{Local, NaiveDate};
use chrono_english::{parse_date_string, Dialect};

/// Parses a target date: plain `YYYY-MM-DD` first, then natural language
/// ('today', 'tomorrow', 'next friday') relative to the local clock.
pub fn parse_target_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    parse_date_string(input, Local::now(), Dialect::Us)
        .map(|dt| dt.date_naive())
        .map_err(|e| anyhow::anyhow!("Failed to parse date '{}': {}", input, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates_parse_exactly() {
        let date = parse_target_date("2024-06-04").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
    }

    #[test]
    fn natural_language_resolves_relative_to_now() {
        let today = Local::now().date_naive();
        assert_eq!(parse_target_date("today").unwrap(), today);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_target_date("the day after whenever").is_err());
    }
}
