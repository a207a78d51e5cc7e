//! User groups maintained by the Visoma service.

use serde::{Deserialize, Serialize};

use crate::error::VisomaError;
use crate::http::HttpClient;
use crate::params::Filters;
use crate::resource::{self, Resource};

/// Details for a user group managed by the Visoma service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGroup {
    /// Unique group id.
    pub id: i64,

    /// Group title.
    pub title: String,

    /// Whether the group is active.
    pub active: bool,
}

impl Resource for UserGroup {
    const NAME: &'static str = "user group";
    const SEARCH_PATH: &'static str = "/api2/usergroups/search/";
}

/// Manager for user group resources.
#[derive(Debug, Clone)]
pub struct UserGroupsManager {
    http: HttpClient,
}

impl UserGroupsManager {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Returns the single user group matching the filters.
    pub async fn get(&self, filters: &Filters) -> Result<UserGroup, VisomaError> {
        resource::get(&self.http, filters).await
    }

    /// Reports on user groups.
    ///
    /// # Arguments
    ///
    /// * `limit` - Fetch user groups up to this limit. The default fetches
    ///   2 user groups.
    /// * `filters` - Criteria to filter the user group list.
    pub async fn list(
        &self,
        limit: Option<u32>,
        filters: Option<&Filters>,
    ) -> Result<Vec<UserGroup>, VisomaError> {
        resource::list(&self.http, limit, filters).await
    }
}
