//! Users maintained by the Visoma service.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::VisomaError;
use crate::http::HttpClient;
use crate::params::Filters;
use crate::resource::{self, Resource};

/// Details for a user managed by the Visoma service.
///
/// Unlike most records, every field is present on the wire. Note the
/// mixed-case wire names; this endpoint predates the `/api2/` naming
/// conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id.
    pub id: i64,

    /// Login name.
    pub username: String,

    /// Full display name.
    #[serde(rename = "FullName")]
    pub full_name: String,

    /// Email address.
    pub email: String,

    /// User type name.
    #[serde(rename = "usertype")]
    pub user_type: String,

    /// Free-form comment.
    pub comment: String,

    /// Time of the last login.
    #[serde(rename = "lastlogin", with = "codec::datetime")]
    pub last_login: NaiveDateTime,
}

impl Resource for User {
    const NAME: &'static str = "user";
    const SEARCH_PATH: &'static str = "/api2/user/search/";
}

/// Manager for user resources.
#[derive(Debug, Clone)]
pub struct UsersManager {
    http: HttpClient,
}

impl UsersManager {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Returns the single user matching the filters.
    pub async fn get(&self, filters: &Filters) -> Result<User, VisomaError> {
        resource::get(&self.http, filters).await
    }

    /// Reports on users.
    ///
    /// # Arguments
    ///
    /// * `limit` - Fetch users up to this limit. The default fetches 2
    ///   users.
    /// * `filters` - Criteria to filter the user list.
    pub async fn list(
        &self,
        limit: Option<u32>,
        filters: Option<&Filters>,
    ) -> Result<Vec<User>, VisomaError> {
        resource::list(&self.http, limit, filters).await
    }
}
