//! Fetch, filter, and query per-league match schedules published as CSV.
//!
//! Each league publishes a `<league>.csv` file (`home,away,date,time` rows,
//! dates as `DD.MM` in the current year). [`ScheduleClient`] fetches and
//! parses a file into [`model::Fixture`]s, dropping malformed and past-dated
//! rows; [`ScheduleStore`] holds one list per league; [`query`] and [`view`]
//! answer the display questions ("today", "tomorrow", "next up per league")
//! and hand render collaborators plain [`model::ScheduleRow`] data.

pub use client::ScheduleClient;
pub use error::{Result, ScheduleError};
pub use schedule::parse::parse_schedule;
pub use store::{RefreshToken, ScheduleStore};

pub mod client;
pub mod date;
pub mod error;
pub mod model;
pub mod query;
pub mod schedule;
pub mod store;
pub mod view;
