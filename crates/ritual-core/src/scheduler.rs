use chrono::NaiveDate;
use chrono_tz::Tz;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::timezone::local_today;

/// Owns day-rollover detection for the materialization pipeline.
///
/// The engine itself is a pure function of (date, templates, known
/// markers); this component supplies the dates. It fires the callback for
/// the current local date immediately and then once per observed local-date
/// change, polling at `poll_interval`.
pub struct RolloverScheduler {
    timezone: Tz,
    poll_interval: Duration,
}

impl RolloverScheduler {
    pub fn new(timezone: Tz, poll_interval: Duration) -> Self {
        Self {
            timezone,
            poll_interval,
        }
    }

    /// The calendar date currently in effect in the scheduler's timezone.
    pub fn today(&self) -> NaiveDate {
        local_today(self.timezone)
    }

    /// Runs until the surrounding task is cancelled.
    pub async fn run<F, Fut>(&self, mut on_date: F)
    where
        F: FnMut(NaiveDate) -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut last = self.today();
        on_date(last).await;

        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let today = self.today();
            if today != last {
                debug!(date = %today, "local date rolled over");
                last = today;
                on_date(today).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_follows_the_configured_timezone() {
        let utc = RolloverScheduler::new(chrono_tz::UTC, Duration::from_secs(30));
        let apia = RolloverScheduler::new(chrono_tz::Pacific::Apia, Duration::from_secs(30));
        let honolulu = RolloverScheduler::new(chrono_tz::Pacific::Honolulu, Duration::from_secs(30));

        // UTC+13/+14 vs UTC-10 are never on the same calendar date as each
        // other for most of the day; the local date must sit within one day
        // of UTC either way.
        let utc_today = utc.today();
        for date in [apia.today(), honolulu.today()] {
            let delta = (date - utc_today).num_days().abs();
            assert!(delta <= 1);
        }
    }

    #[tokio::test]
    async fn run_fires_immediately_for_the_current_date() {
        let scheduler = RolloverScheduler::new(chrono_tz::UTC, Duration::from_secs(3600));
        let expected = scheduler.today();

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let run = scheduler.run(move |date| {
            let tx = tx.clone();
            async move {
                let _ = tx.send(date);
            }
        });

        tokio::select! {
            _ = run => unreachable!("scheduler loop does not return"),
            received = rx.recv() => {
                assert_eq!(received, Some(expected));
            }
        }
    }
}
