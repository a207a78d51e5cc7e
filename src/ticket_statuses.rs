//! Ticket statuses configured on the Visoma service.

use serde::{Deserialize, Serialize};

use crate::error::VisomaError;
use crate::http::HttpClient;
use crate::params::Filters;
use crate::resource::{self, Resource};

/// Details for a ticket status managed by the Visoma service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketStatus {
    /// Unique status id.
    #[serde(rename = "Id")]
    pub id: i64,

    /// Status title.
    #[serde(rename = "Title")]
    pub title: String,

    /// Whether this is the default status for new tickets.
    #[serde(rename = "Default", default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,

    /// Display color.
    #[serde(rename = "Color", default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Id in the external ERP system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erpid: Option<i64>,
}

impl Resource for TicketStatus {
    const NAME: &'static str = "ticket status";
    const SEARCH_PATH: &'static str = "/api2/ticketstatus/search/";
}

/// Manager for ticket status resources.
#[derive(Debug, Clone)]
pub struct TicketStatusesManager {
    http: HttpClient,
}

impl TicketStatusesManager {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Returns the single ticket status matching the filters.
    pub async fn get(&self, filters: &Filters) -> Result<TicketStatus, VisomaError> {
        resource::get(&self.http, filters).await
    }

    /// Reports on ticket statuses.
    ///
    /// # Arguments
    ///
    /// * `limit` - Fetch ticket statuses up to this limit. The default
    ///   fetches 2 ticket statuses.
    /// * `filters` - Criteria to filter the ticket status list.
    pub async fn list(
        &self,
        limit: Option<u32>,
        filters: Option<&Filters>,
    ) -> Result<Vec<TicketStatus>, VisomaError> {
        resource::list(&self.http, limit, filters).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_round_trip() {
        let wire = json!({"Id": 1, "Title": "Open", "Default": true});
        let status: TicketStatus = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(status.title, "Open");
        assert_eq!(status.color, None);
        assert_eq!(serde_json::to_value(&status).unwrap(), wire);
    }
}
