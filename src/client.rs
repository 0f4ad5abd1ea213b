use tracing::{debug, instrument, warn};

use crate::date::{self, ClockMode};
use crate::error::Result;
use crate::model::Fixture;
use crate::schedule;
use crate::store::ScheduleStore;

/// The main entry point for loading league schedules.
///
/// `ScheduleClient` wraps a [`reqwest::Client`] and resolves each league's
/// CSV file (`<league>.csv`) against a base URL.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> matchday::Result<()> {
/// use matchday::{ScheduleClient, ScheduleStore};
///
/// let client = ScheduleClient::new("https://example.org/schedules");
/// let mut store = ScheduleStore::new();
/// let count = client.refresh(&mut store, "Premier").await?;
/// println!("loaded {count} fixtures");
/// # Ok(())
/// # }
/// ```
pub struct ScheduleClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScheduleClient {
    /// Create a new client with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http: client,
            base_url: base_url.into(),
        }
    }

    /// Fetch and parse one league's schedule, keeping only fixtures dated on
    /// or after the local calendar's today.
    #[instrument(skip(self))]
    pub async fn get_schedule(&self, league: &str) -> Result<Vec<Fixture>> {
        let url = schedule::csv_url(&self.base_url, league);
        let body = schedule::get_csv(&self.http, &url).await?;
        let fixtures = schedule::parse::parse_schedule(&body, date::today(ClockMode::Local));
        debug!(league, count = fixtures.len(), "parsed league schedule");
        Ok(fixtures)
    }

    /// Fetch one league's schedule and store it.
    ///
    /// The league's entry is replaced wholesale on success and left untouched
    /// on failure; other leagues are never affected. If another refresh for
    /// the same league begins while this one is awaiting the network, the
    /// older response is discarded on arrival. Returns the number of fixtures
    /// stored, or 0 for a discarded stale response.
    #[instrument(skip(self, store))]
    pub async fn refresh(&self, store: &mut ScheduleStore, league: &str) -> Result<usize> {
        let token = store.begin_refresh(league);
        match self.get_schedule(league).await {
            Ok(fixtures) => {
                let count = fixtures.len();
                if store.commit(token, fixtures) {
                    Ok(count)
                } else {
                    debug!(league, "discarding stale schedule response");
                    Ok(0)
                }
            }
            Err(e) => {
                warn!(league, error = %e, "failed to load schedule, keeping previous data");
                Err(e)
            }
        }
    }
}
