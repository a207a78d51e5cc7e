//! Timers maintained by the Visoma service.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::VisomaError;
use crate::http::HttpClient;
use crate::params::Filters;
use crate::resource::{self, OperationResult, Resource};

/// Creation endpoint for timers.
const CREATE_PATH: &str = "/api2/timer/";

/// Details for a timer managed by the Visoma service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    /// Unique timer id.
    #[serde(rename = "Id")]
    pub id: i64,

    /// Id of the user the timer belongs to.
    #[serde(rename = "UserId")]
    pub user_id: i64,

    /// Name of the user the timer belongs to.
    #[serde(rename = "User")]
    pub user: String,

    /// When the timer started.
    #[serde(rename = "Start", with = "codec::datetime")]
    pub start: NaiveDateTime,

    /// When the timer stopped.
    #[serde(rename = "Stop", with = "codec::datetime")]
    pub stop: NaiveDateTime,

    /// What the time was spent on.
    #[serde(rename = "Description")]
    pub description: String,

    /// Ticket the time is booked against.
    #[serde(rename = "TicketId", default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,

    /// Billing article.
    #[serde(rename = "ArticleId", default, skip_serializing_if = "Option::is_none")]
    pub article_id: Option<i64>,

    /// Timer type id.
    #[serde(rename = "TypeId", default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,

    /// Internal notice, not visible to the customer.
    #[serde(
        rename = "InternalNotice",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_notice: Option<String>,

    /// Whether the timer was scheduled in advance.
    #[serde(rename = "Scheduled", default, skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<bool>,

    /// Whether the time is billable.
    #[serde(rename = "Billable", default, skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,

    /// Whether the timer is closed.
    #[serde(rename = "Closed", default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,

    /// Whether travel time applies.
    #[serde(rename = "Approach", default, skip_serializing_if = "Option::is_none")]
    pub approach: Option<bool>,

    /// Id in the external ERP system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erpid: Option<i64>,
}

impl Resource for Timer {
    const NAME: &'static str = "timer";
    const SEARCH_PATH: &'static str = "/api2/timer/search/";
}

impl From<&Timer> for i64 {
    fn from(timer: &Timer) -> i64 {
        timer.id
    }
}

/// A request to create a timer. The id is assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerRequest {
    /// Id of the user the timer belongs to.
    #[serde(rename = "UserId")]
    pub user_id: i64,

    /// When the timer started.
    #[serde(rename = "Start", with = "codec::datetime")]
    pub start: NaiveDateTime,

    /// When the timer stopped.
    #[serde(rename = "Stop", with = "codec::datetime")]
    pub stop: NaiveDateTime,

    /// What the time was spent on.
    #[serde(rename = "Description")]
    pub description: String,

    /// Whether the time is billable. [`TimerRequest::new`] starts this at
    /// `false` rather than absent.
    #[serde(rename = "Billable", default, skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,

    /// Billing article.
    #[serde(rename = "ArticleId", default, skip_serializing_if = "Option::is_none")]
    pub article_id: Option<i64>,

    /// Internal notice, not visible to the customer.
    #[serde(
        rename = "InternalNotice",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_notice: Option<String>,

    /// Whether the timer was scheduled in advance.
    #[serde(rename = "Scheduled", default, skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<bool>,

    /// Ticket the time is booked against.
    #[serde(rename = "TicketId", default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,

    /// Timer type id.
    #[serde(rename = "TypeId", default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,

    // The fields below are accepted by the endpoint but have no observable
    // effect on create; some may only apply when updating existing records.
    /// Whether travel time applies.
    #[serde(rename = "Approach", default, skip_serializing_if = "Option::is_none")]
    pub approach: Option<bool>,

    /// Whether the timer is closed.
    #[serde(rename = "Closed", default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,

    /// Timer status id.
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,

    /// Whether to update the user's worktime account.
    #[serde(
        rename = "UpdateWorktime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_worktime: Option<bool>,

    /// Whether the start/stop values were entered manually.
    #[serde(rename = "bCustomTime", default, skip_serializing_if = "Option::is_none")]
    pub custom_time: Option<bool>,

    /// Telephony integration marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cti: Option<String>,

    /// Id in the external ERP system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erpid: Option<i64>,

    /// Whether to round the booked time.
    #[serde(rename = "roundTime", default, skip_serializing_if = "Option::is_none")]
    pub round_time: Option<bool>,
}

impl TimerRequest {
    /// Creates a request with the required fields. Billable starts at
    /// `false`; the remaining optional fields start absent.
    pub fn new(
        user_id: i64,
        start: NaiveDateTime,
        stop: NaiveDateTime,
        description: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            start,
            stop,
            description: description.into(),
            billable: Some(false),
            article_id: None,
            internal_notice: None,
            scheduled: None,
            ticket_id: None,
            type_id: None,
            approach: None,
            closed: None,
            status: None,
            update_worktime: None,
            custom_time: None,
            cti: None,
            erpid: None,
            round_time: None,
        }
    }
}

/// Manager for timer resources.
#[derive(Debug, Clone)]
pub struct TimersManager {
    http: HttpClient,
}

impl TimersManager {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Returns the single timer matching the filters.
    pub async fn get(&self, filters: &Filters) -> Result<Timer, VisomaError> {
        resource::get(&self.http, filters).await
    }

    /// Reports on timers.
    ///
    /// # Arguments
    ///
    /// * `limit` - Fetch timers up to this limit. The default fetches 2
    ///   timers.
    /// * `filters` - Criteria to filter the timer list.
    pub async fn list(
        &self,
        limit: Option<u32>,
        filters: Option<&Filters>,
    ) -> Result<Vec<Timer>, VisomaError> {
        resource::list(&self.http, limit, filters).await
    }

    /// Creates a timer.
    pub async fn create(&self, request: &TimerRequest) -> Result<OperationResult, VisomaError> {
        resource::create(&self.http, CREATE_PATH, request).await
    }

    /// Deletes a timer, given its id or the record itself.
    pub async fn delete(&self, timer: impl Into<i64>) -> Result<OperationResult, VisomaError> {
        let id: i64 = timer.into();
        resource::delete(&self.http, &format!("/api2/timer/{id}")).await
    }

    /// Closes a timer, given its id or the record itself.
    ///
    /// The service has no API endpoint for this operation; the request goes
    /// to a human-facing page whose redirect is the only success signal.
    /// Closing an already-closed timer has no effect.
    pub async fn close(&self, timer: impl Into<i64>) -> Result<(), VisomaError> {
        let id: i64 = timer.into();
        self.http
            .get_json(&format!("/timer/close/id/{id}"), None)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn first_timer() -> serde_json::Value {
        json!({
            "Id": 7,
            "UserId": 3,
            "User": "user1",
            "Start": "2024-01-08 09:00:00",
            "Stop": "2024-01-08 09:30:00",
            "Description": "Investigating the first ticket.",
        })
    }

    #[test]
    fn test_decode_parses_timestamps() {
        let timer: Timer = serde_json::from_value(first_timer()).unwrap();
        assert_eq!(timer.id, 7);
        assert_eq!(timer.start.to_string(), "2024-01-08 09:00:00");
        assert_eq!(timer.billable, None);
    }

    #[test]
    fn test_round_trip_drops_absent_optionals() {
        let timer: Timer = serde_json::from_value(first_timer()).unwrap();
        assert_eq!(serde_json::to_value(&timer).unwrap(), first_timer());
    }

    #[test]
    fn test_record_converts_to_id() {
        let timer: Timer = serde_json::from_value(first_timer()).unwrap();
        assert_eq!(i64::from(&timer), 7);
    }

    #[test]
    fn test_request_defaults_billable_off() {
        let timer: Timer = serde_json::from_value(first_timer()).unwrap();
        let request = TimerRequest::new(3, timer.start, timer.stop, "Follow-up work");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "UserId": 3,
                "Start": "2024-01-08 09:00:00",
                "Stop": "2024-01-08 09:30:00",
                "Description": "Follow-up work",
                "Billable": false,
            })
        );
    }

    #[test]
    fn test_request_keeps_vendor_field_names() {
        let timer: Timer = serde_json::from_value(first_timer()).unwrap();
        let mut request = TimerRequest::new(3, timer.start, timer.stop, "Manual entry");
        request.custom_time = Some(true);
        request.round_time = Some(false);

        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["bCustomTime"], json!(true));
        assert_eq!(wire["roundTime"], json!(false));
    }
}
