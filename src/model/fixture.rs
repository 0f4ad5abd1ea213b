use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// A single scheduled match, as listed in a league's CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    pub home: String,
    pub away: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl Fixture {
    /// Kickoff as a civil date and time on the broadcast calendar.
    pub fn kickoff(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
