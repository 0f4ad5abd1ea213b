use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::date::{DATE_FORMAT, KICKOFF_TIME_FORMAT};
use crate::model::Fixture;

/// Where a fixture's kickoff sits relative to "now" on the broadcast clock.
///
/// Render collaborators use this as a display hint, typically a colored
/// time cell. Fixtures on any date other than today are always `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum KickoffStatus {
    /// Kicked off earlier today.
    Past,
    /// Kicks off later today.
    Future,
    /// No hint: not today, or exactly now.
    Neutral,
}

/// Classify a fixture against `now`, the current civil time on the broadcast
/// clock.
pub fn classify(fixture: &Fixture, now: NaiveDateTime) -> KickoffStatus {
    if fixture.date != now.date() {
        return KickoffStatus::Neutral;
    }
    match fixture.kickoff().cmp(&now) {
        Ordering::Less => KickoffStatus::Past,
        Ordering::Greater => KickoffStatus::Future,
        Ordering::Equal => KickoffStatus::Neutral,
    }
}

/// A display-ready schedule row, handed to render collaborators as plain
/// data: formatted date and time strings plus the kickoff status hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub home: String,
    pub away: String,
    pub date: String,
    pub time: String,
    pub status: KickoffStatus,
}

impl ScheduleRow {
    /// Build the row for `fixture`, classified against `now`.
    pub fn from_fixture(fixture: &Fixture, now: NaiveDateTime) -> Self {
        Self {
            home: fixture.home.clone(),
            away: fixture.away.clone(),
            date: fixture.date.format(DATE_FORMAT).to_string(),
            time: fixture.time.format(KICKOFF_TIME_FORMAT).to_string(),
            status: classify(fixture, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn fixture(date: &str, time: &str) -> Fixture {
        Fixture {
            home: "Team A".to_string(),
            away: "Team B".to_string(),
            date: date.parse().unwrap(),
            time: time.parse().unwrap(),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 15)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
    }

    #[test]
    fn earlier_kickoff_today_is_past() {
        assert_eq!(classify(&fixture("2026-06-15", "09:30:00"), now()), KickoffStatus::Past);
    }

    #[test]
    fn later_kickoff_today_is_future() {
        assert_eq!(classify(&fixture("2026-06-15", "18:00:00"), now()), KickoffStatus::Future);
    }

    #[test]
    fn other_days_are_neutral() {
        assert_eq!(classify(&fixture("2026-06-16", "09:30:00"), now()), KickoffStatus::Neutral);
        assert_eq!(classify(&fixture("2026-06-14", "18:00:00"), now()), KickoffStatus::Neutral);
    }

    #[test]
    fn kickoff_exactly_now_is_neutral() {
        assert_eq!(classify(&fixture("2026-06-15", "12:00:00"), now()), KickoffStatus::Neutral);
    }

    #[test]
    fn row_formats_date_and_time() {
        let row = ScheduleRow::from_fixture(&fixture("2026-06-15", "09:05:00"), now());
        assert_eq!(row.date, "2026-06-15");
        assert_eq!(row.time, "09:05");
        assert_eq!(row.status, KickoffStatus::Past);
    }
}
