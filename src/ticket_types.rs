//! Ticket types configured on the Visoma service.

use serde::{Deserialize, Serialize};

use crate::error::VisomaError;
use crate::http::HttpClient;
use crate::params::Filters;
use crate::resource::{self, Resource};

/// Details for a ticket type managed by the Visoma service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketType {
    /// Unique type id.
    #[serde(rename = "Id")]
    pub id: i64,

    /// Type title.
    #[serde(rename = "Title")]
    pub title: String,

    /// Type description.
    #[serde(rename = "Description")]
    pub description: String,

    /// Whether the type can be used for new tickets.
    #[serde(rename = "Active", default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Id in the external ERP system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erpid: Option<i64>,
}

impl Resource for TicketType {
    const NAME: &'static str = "ticket type";
    const SEARCH_PATH: &'static str = "/api2/tickettype/search/";
}

/// Manager for ticket type resources.
#[derive(Debug, Clone)]
pub struct TicketTypesManager {
    http: HttpClient,
}

impl TicketTypesManager {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Returns the single ticket type matching the filters.
    pub async fn get(&self, filters: &Filters) -> Result<TicketType, VisomaError> {
        resource::get(&self.http, filters).await
    }

    /// Reports on ticket types.
    ///
    /// # Arguments
    ///
    /// * `limit` - Fetch ticket types up to this limit. The default fetches
    ///   2 ticket types.
    /// * `filters` - Criteria to filter the ticket type list.
    pub async fn list(
        &self,
        limit: Option<u32>,
        filters: Option<&Filters>,
    ) -> Result<Vec<TicketType>, VisomaError> {
        resource::list(&self.http, limit, filters).await
    }
}
