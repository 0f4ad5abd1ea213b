use chrono::NaiveDate;
use itertools::Itertools;

use crate::model::Fixture;
use crate::store::ScheduleStore;

/// All fixtures on `date`, league by league in the store's order, each
/// league's fixtures in their stored order.
pub fn on_date(store: &ScheduleStore, date: NaiveDate) -> Vec<Fixture> {
    store
        .iter()
        .flat_map(|(_, fixtures)| fixtures.iter().filter(move |f| f.date == date))
        .cloned()
        .collect_vec()
}

/// Up to `per_league_limit` fixtures dated on or after `from`, from every
/// league, concatenated in the store's order.
///
/// The cap applies per league rather than globally: every league stays
/// represented, at the cost of not being a strict soonest-N ranking.
pub fn upcoming(store: &ScheduleStore, from: NaiveDate, per_league_limit: usize) -> Vec<Fixture> {
    store
        .iter()
        .flat_map(|(_, fixtures)| {
            fixtures
                .iter()
                .filter(move |f| f.date >= from)
                .take(per_league_limit)
        })
        .cloned()
        .collect_vec()
}

/// Fixtures on `today` followed by fixtures on `tomorrow`.
pub fn today_and_tomorrow(
    store: &ScheduleStore,
    today: NaiveDate,
    tomorrow: NaiveDate,
) -> Vec<Fixture> {
    let mut fixtures = on_date(store, today);
    fixtures.extend(on_date(store, tomorrow));
    fixtures
}

/// Order fixtures by kickoff time, ascending.
///
/// Meant for single-day lists, where every entry shares a date and the time
/// of day is the whole ordering. The sort is stable: fixtures with equal
/// times keep their input order.
pub fn sort_by_kickoff(fixtures: &mut [Fixture]) {
    fixtures.sort_by_key(|f| f.time);
}
