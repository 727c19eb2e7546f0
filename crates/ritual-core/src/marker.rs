use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier linking a materialized instance to its generating
/// (template, calendar date) pair.
///
/// Rendered as `[recurring:<template-id>:<YYYY-MM-DD>]`. The rendered form
/// is what gets persisted on the task entity and what the guard and janitor
/// compare; two markers are the same claim iff their strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecurringMarker {
    template_id: String,
    date_key: String,
}

impl RecurringMarker {
    pub fn new(template_id: &str, date: NaiveDate) -> Self {
        Self {
            template_id: template_id.to_string(),
            date_key: date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn date_key(&self) -> &str {
        &self.date_key
    }
}

impl fmt::Display for RecurringMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[recurring:{}:{}]", self.template_id, self.date_key)
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid recurring marker: {0}")]
pub struct ParseMarkerError(String);

impl FromStr for RecurringMarker {
    type Err = ParseMarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix("[recurring:")
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| ParseMarkerError(s.to_string()))?;

        // Template ids may contain ':'; the date key never does, so split
        // from the right.
        let (template_id, date_key) = body
            .rsplit_once(':')
            .ok_or_else(|| ParseMarkerError(s.to_string()))?;
        if template_id.is_empty() {
            return Err(ParseMarkerError(s.to_string()));
        }
        NaiveDate::parse_from_str(date_key, "%Y-%m-%d")
            .map_err(|_| ParseMarkerError(s.to_string()))?;

        Ok(Self {
            template_id: template_id.to_string(),
            date_key: date_key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn renders_bracketed_form() {
        let marker = RecurringMarker::new("T1", june_first());
        assert_eq!(marker.to_string(), "[recurring:T1:2024-06-01]");
    }

    #[test]
    fn parse_round_trip() {
        let marker: RecurringMarker = "[recurring:evt-lunch:2024-06-01]".parse().unwrap();
        assert_eq!(marker.template_id(), "evt-lunch");
        assert_eq!(marker.date_key(), "2024-06-01");
        assert_eq!(marker, RecurringMarker::new("evt-lunch", june_first()));
    }

    #[test]
    fn template_ids_containing_colons_survive() {
        let marker: RecurringMarker = "[recurring:ns:evt:7:2024-06-01]".parse().unwrap();
        assert_eq!(marker.template_id(), "ns:evt:7");
        assert_eq!(marker.date_key(), "2024-06-01");
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("recurring:T1:2024-06-01".parse::<RecurringMarker>().is_err());
        assert!("[recurring:T1]".parse::<RecurringMarker>().is_err());
        assert!("[recurring::2024-06-01]".parse::<RecurringMarker>().is_err());
        assert!("[recurring:T1:not-a-date]".parse::<RecurringMarker>().is_err());
    }
}
