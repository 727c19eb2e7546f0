use crate::error::CoreError;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Validate an IANA timezone name.
pub fn validate_timezone(timezone: &str) -> Result<Tz, CoreError> {
    Tz::from_str(timezone).map_err(|_| CoreError::InvalidTimezone(timezone.to_string()))
}

/// Map a local wall-clock (date, time) to UTC.
///
/// Ambiguous local times (DST fall-back) resolve to the earliest valid
/// instant. Non-existent local times (DST spring-forward gap) are shifted
/// one hour later; a gap wider than that yields None.
pub fn local_datetime_to_utc(date: NaiveDate, time: NaiveTime, tz: Tz) -> Option<DateTime<Utc>> {
    let naive = date.and_time(time);
    match tz.from_local_datetime(&naive).earliest() {
        Some(local_dt) => Some(local_dt.with_timezone(&Utc)),
        None => {
            let shifted = naive + chrono::Duration::hours(1);
            tz.from_local_datetime(&shifted)
                .earliest()
                .map(|local_dt| local_dt.with_timezone(&Utc))
        }
    }
}

/// The calendar date currently in effect in `tz`.
///
/// This is the date key source: local, not UTC, so materialization does not
/// go off by one around midnight when the process clock and UTC disagree on
/// "today".
pub fn local_today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_timezone_accepts_iana_names() {
        assert!(validate_timezone("UTC").is_ok());
        assert!(validate_timezone("America/New_York").is_ok());
        assert!(validate_timezone("Invalid/Timezone").is_err());
    }

    #[test]
    fn local_noon_in_utc_is_noon() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        let time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

        let utc = local_datetime_to_utc(date, time, chrono_tz::UTC).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2024, 6, 4, 12, 0, 0).unwrap());
    }

    #[test]
    fn local_time_respects_offset() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        let time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

        // EDT is UTC-4 in June.
        let utc = local_datetime_to_utc(date, time, chrono_tz::America::New_York).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2024, 6, 4, 16, 0, 0).unwrap());
    }

    #[test]
    fn dst_gap_shifts_forward() {
        // 2024-03-10 02:30 does not exist in America/New_York.
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let time = NaiveTime::from_hms_opt(2, 30, 0).unwrap();

        let utc = local_datetime_to_utc(date, time, chrono_tz::America::New_York).unwrap();
        // Shifted to 03:30 EDT = 07:30 UTC.
        assert_eq!(utc, Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap());
    }
}
