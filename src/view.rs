use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::date::{self, ClockMode};
use crate::model::{Fixture, ScheduleRow};
use crate::query;
use crate::store::ScheduleStore;

/// Per-league cap for the [`View::NextUp`] view.
pub const NEXT_UP_LIMIT: usize = 5;

/// Canonical placeholder wording for an empty row list. Render collaborators
/// show this as a single explanatory row instead of an empty table body.
pub const EMPTY_MESSAGE: &str = "No matches available.";

/// The selectable views of the schedule surface: one tab per league plus the
/// date-based buttons.
#[derive(Debug, Clone, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum View {
    /// One league's full schedule, in stored order.
    League(String),
    /// Today's fixtures across all leagues, ordered by kickoff.
    Today,
    /// Tomorrow's fixtures across all leagues, ordered by kickoff.
    Tomorrow,
    /// The next [`NEXT_UP_LIMIT`] fixtures from every league.
    NextUp,
    /// Today's fixtures followed by tomorrow's, across all leagues.
    TodayAndTomorrow,
}

/// Fixtures for `view`, with day boundaries taken from `mode`'s calendar.
pub fn select(store: &ScheduleStore, view: &View, mode: ClockMode) -> Vec<Fixture> {
    select_from(store, view, date::today(mode))
}

/// Same as [`select`] with the reference day pinned, for callers that need a
/// reproducible "today".
pub fn select_from(store: &ScheduleStore, view: &View, today: NaiveDate) -> Vec<Fixture> {
    let tomorrow = today + Duration::days(1);
    match view {
        View::League(name) => store.get(name).map(<[Fixture]>::to_vec).unwrap_or_default(),
        View::Today => single_day(store, today),
        View::Tomorrow => single_day(store, tomorrow),
        View::NextUp => query::upcoming(store, today, NEXT_UP_LIMIT),
        View::TodayAndTomorrow => query::today_and_tomorrow(store, today, tomorrow),
    }
}

fn single_day(store: &ScheduleStore, day: NaiveDate) -> Vec<Fixture> {
    let mut fixtures = query::on_date(store, day);
    query::sort_by_kickoff(&mut fixtures);
    fixtures
}

/// Display rows for `fixtures`, classified against `now` (the current civil
/// time on the broadcast clock, see [`date::civil_now`]). An empty result is
/// the collaborator's cue to show [`EMPTY_MESSAGE`].
pub fn rows(fixtures: &[Fixture], now: NaiveDateTime) -> Vec<ScheduleRow> {
    fixtures
        .iter()
        .map(|fixture| ScheduleRow::from_fixture(fixture, now))
        .collect()
}
