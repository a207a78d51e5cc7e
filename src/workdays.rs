//! Workdays maintained by the Visoma service.
//!
//! Workdays have no structured API at all. Closing one means driving the
//! same legacy HTML pages a browser would: fetch the day page, scrape the
//! numeric workday id out of it, then hit the submit endpoint.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::VisomaError;
use crate::http::HttpClient;

/// Pattern the day page embeds the workday id in.
static WORKDAY_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/workend/submitworkend/id/(\d+)/").expect("workday id pattern is valid")
});

/// Manager for workday resources.
#[derive(Debug, Clone)]
pub struct WorkdaysManager {
    http: HttpClient,
}

impl WorkdaysManager {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Closes a workday.
    ///
    /// The service has no API endpoint for this operation; the workday id
    /// is scraped from the day's HTML page before submitting. Both
    /// requests are acknowledged with a redirect, and closing an
    /// already-closed day has no effect.
    ///
    /// Example requests:
    ///
    /// ```text
    /// GET /workend/index/date/2024-01-08
    /// GET /workend/submitworkend/id/154942
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with `VisomaError::Scrape` when the day page does not carry a
    /// workday id.
    pub async fn close(&self, day: NaiveDate) -> Result<(), VisomaError> {
        let html = self
            .http
            .get_text(&format!("/workend/index/date/{day}"))
            .await?
            .unwrap_or_default();

        let id = extract_workday_id(&html)?;

        self.http
            .get_json(&format!("/workend/submitworkend/id/{id}"), None)
            .await?;
        Ok(())
    }
}

/// Extracts the numeric workday id from a day page.
fn extract_workday_id(html: &str) -> Result<i64, VisomaError> {
    WORKDAY_ID
        .captures(html)
        .and_then(|captures| captures.get(1))
        .and_then(|id| id.as_str().parse().ok())
        .ok_or_else(|| VisomaError::scrape(html))
}
