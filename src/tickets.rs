//! Tickets maintained by the Visoma service.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::VisomaError;
use crate::http::HttpClient;
use crate::params::Filters;
use crate::resource::{self, OperationResult, Resource};

/// Creation endpoint for tickets.
const CREATE_PATH: &str = "/api2/ticket/";

/// Details for a ticket managed by the Visoma service.
///
/// Fields beyond the required set may be absent from the wire payload
/// entirely; re-encoding drops them again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket id.
    #[serde(rename = "Id")]
    pub id: i64,

    /// Human-facing ticket number.
    #[serde(rename = "Number")]
    pub number: i64,

    /// Ticket title.
    #[serde(rename = "Title")]
    pub title: String,

    /// Ticket description.
    #[serde(rename = "Description")]
    pub description: String,

    /// Name of the customer the ticket belongs to.
    #[serde(rename = "CustomerName")]
    pub customer_name: String,

    /// Id of the customer the ticket belongs to.
    #[serde(rename = "CustomerId")]
    pub customer_id: i64,

    /// Current status name.
    #[serde(rename = "Status")]
    pub status: String,

    /// Current status id.
    #[serde(rename = "StatusId")]
    pub status_id: i64,

    /// Creation timestamp.
    #[serde(
        rename = "Created",
        default,
        with = "codec::datetime_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<NaiveDateTime>,

    /// Last modification timestamp.
    #[serde(
        rename = "Modified",
        default,
        with = "codec::datetime_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified: Option<NaiveDateTime>,

    /// Due timestamp.
    #[serde(
        rename = "DueOn",
        default,
        with = "codec::datetime_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_on: Option<NaiveDateTime>,

    /// Accumulated work duration in hours.
    #[serde(rename = "Duration", default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Whether the customer is notified on changes.
    #[serde(
        rename = "NotifyCustomer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub notify_customer: Option<bool>,

    /// Priority id.
    #[serde(rename = "PriorityId", default, skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<i64>,

    /// Comma separated list of linked project ids, e.g. `"6,87,10"`.
    #[serde(rename = "ProjectIds", default, skip_serializing_if = "Option::is_none")]
    pub project_ids: Option<String>,
}

impl Resource for Ticket {
    const NAME: &'static str = "ticket";
    const SEARCH_PATH: &'static str = "/api2/tickets/search/";
}

/// A request to create a ticket. The id is assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketRequest {
    /// Ticket title.
    #[serde(rename = "Title")]
    pub title: String,

    /// Ticket description.
    #[serde(rename = "Description")]
    pub description: String,

    /// Id of the customer the ticket belongs to.
    #[serde(rename = "CustomerId")]
    pub customer_id: i64,

    /// Id of the customer address the ticket is filed under.
    #[serde(rename = "AddressId")]
    pub address_id: i64,

    /// Due timestamp.
    #[serde(
        rename = "DueOn",
        default,
        with = "codec::datetime_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_on: Option<NaiveDateTime>,

    /// Whether the customer is notified on changes.
    #[serde(
        rename = "NotifyCustomer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub notify_customer: Option<bool>,

    /// Priority id.
    #[serde(rename = "PriorityId", default, skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<i64>,

    /// Comma separated list of linked project ids, e.g. `"6,87,10"`.
    #[serde(rename = "ProjectIds", default, skip_serializing_if = "Option::is_none")]
    pub project_ids: Option<String>,
}

impl TicketRequest {
    /// Creates a request with the required fields; optional fields start
    /// absent and can be set directly.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        customer_id: i64,
        address_id: i64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            customer_id,
            address_id,
            due_on: None,
            notify_customer: None,
            priority_id: None,
            project_ids: None,
        }
    }
}

/// Manager for ticket resources.
#[derive(Debug, Clone)]
pub struct TicketsManager {
    http: HttpClient,
}

impl TicketsManager {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Returns the single ticket matching the filters.
    ///
    /// # Errors
    ///
    /// Fails with `VisomaError::NotFound` when nothing matches and
    /// `VisomaError::TooManyResults` when the filters are ambiguous.
    pub async fn get(&self, filters: &Filters) -> Result<Ticket, VisomaError> {
        resource::get(&self.http, filters).await
    }

    /// Reports on tickets.
    ///
    /// # Arguments
    ///
    /// * `limit` - Fetch tickets up to this limit. The default fetches 2
    ///   tickets.
    /// * `filters` - Criteria to filter the ticket list.
    pub async fn list(
        &self,
        limit: Option<u32>,
        filters: Option<&Filters>,
    ) -> Result<Vec<Ticket>, VisomaError> {
        resource::list(&self.http, limit, filters).await
    }

    /// Creates a ticket.
    pub async fn create(&self, request: &TicketRequest) -> Result<OperationResult, VisomaError> {
        resource::create(&self.http, CREATE_PATH, request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn first_ticket() -> serde_json::Value {
        json!({
            "Id": 1,
            "Number": 1,
            "Title": "Ticket 1",
            "Description": "The first test ticket.",
            "CustomerName": "Customer 1",
            "CustomerId": 1,
            "Status": "Open",
            "StatusId": 1,
        })
    }

    #[test]
    fn test_decode_required_fields() {
        let ticket: Ticket = serde_json::from_value(first_ticket()).unwrap();
        assert_eq!(ticket.id, 1);
        assert_eq!(ticket.title, "Ticket 1");
        assert_eq!(ticket.status, "Open");
        assert_eq!(ticket.created, None);
    }

    #[test]
    fn test_round_trip_drops_absent_optionals() {
        let ticket: Ticket = serde_json::from_value(first_ticket()).unwrap();
        assert_eq!(serde_json::to_value(&ticket).unwrap(), first_ticket());
    }

    #[test]
    fn test_round_trip_keeps_timestamps() {
        let mut wire = first_ticket();
        wire["Created"] = json!("2024-01-08 12:30:00");
        wire["Duration"] = json!(1.5);

        let ticket: Ticket = serde_json::from_value(wire.clone()).unwrap();
        assert!(ticket.created.is_some());
        assert_eq!(serde_json::to_value(&ticket).unwrap(), wire);
    }

    #[test]
    fn test_decode_missing_required_field_fails() {
        let mut wire = first_ticket();
        wire.as_object_mut().unwrap().remove("Title");
        assert!(serde_json::from_value::<Ticket>(wire).is_err());
    }

    #[test]
    fn test_request_serializes_required_fields_only() {
        let request = TicketRequest::new("Ticket 3", "The third test ticket.", 1, 1);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "Title": "Ticket 3",
                "Description": "The third test ticket.",
                "CustomerId": 1,
                "AddressId": 1,
            })
        );
    }
}
