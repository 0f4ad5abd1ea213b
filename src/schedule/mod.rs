pub mod parse;

use tracing::debug;

use crate::error::{Result, ScheduleError};

/// Fetch a URL and return the response body as CSV text.
pub(crate) async fn get_csv(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url, "fetching schedule");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ScheduleError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScheduleError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| ScheduleError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}

/// Resolve a league's schedule file against the configured base URL.
/// One file per league, named after the league identifier.
pub(crate) fn csv_url(base_url: &str, league: &str) -> String {
    format!("{}/{}.csv", base_url.trim_end_matches('/'), league)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_url_joins_base_and_league() {
        assert_eq!(
            csv_url("https://example.org/schedules", "Premier"),
            "https://example.org/schedules/Premier.csv"
        );
        assert_eq!(
            csv_url("https://example.org/schedules/", "Premier"),
            "https://example.org/schedules/Premier.csv"
        );
    }
}
