use chrono::{Datelike, NaiveDate, NaiveTime};
use tracing::debug;

use crate::date::{self, KICKOFF_TIME_FORMAT};
use crate::model::Fixture;

/// Parse raw CSV text into the fixtures still relevant on `reference`.
///
/// The first line is a header and is skipped. Each data row contributes a
/// fixture only if it has at least four non-empty fields (home, away, date,
/// time; extra fields are ignored), its date names a real calendar day in
/// `reference`'s year, that day is not before `reference`, and the time is
/// `HH:MM`. Everything else is dropped without comment: trailing blank lines
/// and half-filled rows are normal in the published files.
///
/// Surviving fixtures keep their input order. Storing the result and
/// triggering a render are the caller's business.
pub fn parse_schedule(raw: &str, reference: NaiveDate) -> Vec<Fixture> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    let fixtures: Vec<Fixture> = reader
        .records()
        .filter_map(|record| record.ok())
        .filter_map(|record| parse_row(&record, reference))
        .collect();

    debug!(kept = fixtures.len(), "parsed schedule");
    fixtures
}

fn parse_row(record: &csv::StringRecord, reference: NaiveDate) -> Option<Fixture> {
    if record.len() < 4 {
        return None;
    }
    let home = record.get(0)?;
    let away = record.get(1)?;
    let raw_date = record.get(2)?;
    let raw_time = record.get(3)?;
    if home.is_empty() || away.is_empty() || raw_date.is_empty() || raw_time.is_empty() {
        return None;
    }

    let date = date::normalize(raw_date, reference.year())?;
    if date < reference {
        return None;
    }
    let time = NaiveTime::parse_from_str(raw_time, KICKOFF_TIME_FORMAT).ok()?;

    Some(Fixture {
        home: home.to_owned(),
        away: away.to_owned(),
        date,
        time,
    })
}
