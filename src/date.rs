use chrono::{Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};

/// Civil offset (hours east of UTC) of the broadcast calendar. Kickoff
/// classification uses this fixed offset so the same schedule is colored the
/// same wherever the viewer happens to run.
pub const BROADCAST_OFFSET_HOURS: i32 = -6;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const KICKOFF_TIME_FORMAT: &str = "%H:%M";

/// Which wall clock a calendar question is answered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ClockMode {
    /// The runtime's local calendar.
    Local,
    /// The civil calendar at [`BROADCAST_OFFSET_HOURS`], independent of the
    /// runtime's timezone.
    Broadcast,
}

/// Turn a `D.M` or `DD.MM` source date into a calendar date in
/// `reference_year`.
///
/// The published files carry no usable year (a trailing `.YYYY` segment
/// appears in some of them and is ignored), so the year is always the
/// caller's. Schedules crossing a year boundary are out of scope: a December
/// file fetched in January comes back empty rather than shifted. Returns
/// `None` for anything that does not name a real day of `reference_year`.
pub fn normalize(raw: &str, reference_year: i32) -> Option<NaiveDate> {
    let mut parts = raw.split('.');
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(reference_year, month, day)
}

/// Today's date under `mode`.
pub fn today(mode: ClockMode) -> NaiveDate {
    civil_now(mode).date()
}

/// Tomorrow's date under `mode`.
pub fn tomorrow(mode: ClockMode) -> NaiveDate {
    today(mode) + Duration::days(1)
}

/// The current civil date and time under `mode`.
pub fn civil_now(mode: ClockMode) -> NaiveDateTime {
    match mode {
        ClockMode::Local => Local::now().naive_local(),
        ClockMode::Broadcast => {
            let offset = FixedOffset::east_opt(BROADCAST_OFFSET_HOURS * 3600)
                .unwrap_or_else(|| unreachable!());
            Utc::now().with_timezone(&offset).naive_local()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_padded_and_unpadded_days() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 5);
        assert_eq!(normalize("05.03", 2026), expected);
        assert_eq!(normalize("5.3", 2026), expected);
    }

    #[test]
    fn ignores_trailing_year_segment() {
        assert_eq!(
            normalize("24.12.2019", 2026),
            NaiveDate::from_ymd_opt(2026, 12, 24)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(normalize("invalid", 2026), None);
        assert_eq!(normalize("", 2026), None);
        assert_eq!(normalize("12", 2026), None);
        assert_eq!(normalize("ab.cd", 2026), None);
    }

    #[test]
    fn rejects_impossible_calendar_days() {
        assert_eq!(normalize("31.02", 2026), None);
        assert_eq!(normalize("29.02", 2026), None);
        assert_eq!(
            normalize("29.02", 2028),
            NaiveDate::from_ymd_opt(2028, 2, 29)
        );
    }

    #[test]
    fn tomorrow_is_one_day_after_today() {
        for mode in [ClockMode::Local, ClockMode::Broadcast] {
            assert_eq!(tomorrow(mode) - today(mode), Duration::days(1));
        }
    }

    #[test]
    fn broadcast_clock_trails_utc_by_six_hours() {
        let before = Utc::now().naive_utc();
        let broadcast = civil_now(ClockMode::Broadcast);
        let after = Utc::now().naive_utc();

        assert!(before - broadcast >= Duration::hours(6) - Duration::seconds(1));
        assert!(after - broadcast <= Duration::hours(6) + Duration::seconds(1));
    }

    #[test]
    fn clock_mode_displays_kebab_case() {
        assert_eq!(ClockMode::Broadcast.to_string(), "broadcast");
    }
}
