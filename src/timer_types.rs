//! Timer types configured on the Visoma service.

use serde::{Deserialize, Serialize};

use crate::error::VisomaError;
use crate::http::HttpClient;
use crate::params::Filters;
use crate::resource::{self, Resource};

/// Details for a timer type managed by the Visoma service.
///
/// This endpoint uses lowercase wire names throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerType {
    /// Unique type id.
    pub id: i64,

    /// Type title.
    pub title: String,

    /// Type description.
    pub description: String,

    /// Numeric type discriminator.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<i64>,

    /// Id in the external ERP system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erpid: Option<i64>,

    /// Name of the type discriminator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typename: Option<String>,

    /// Display color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Resource for TimerType {
    const NAME: &'static str = "timer type";
    const SEARCH_PATH: &'static str = "/api2/timertype/search/";
}

/// Manager for timer type resources.
#[derive(Debug, Clone)]
pub struct TimerTypesManager {
    http: HttpClient,
}

impl TimerTypesManager {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Returns the single timer type matching the filters.
    pub async fn get(&self, filters: &Filters) -> Result<TimerType, VisomaError> {
        resource::get(&self.http, filters).await
    }

    /// Reports on timer types.
    ///
    /// # Arguments
    ///
    /// * `limit` - Fetch timer types up to this limit. The default fetches
    ///   2 timer types.
    /// * `filters` - Criteria to filter the timer type list.
    pub async fn list(
        &self,
        limit: Option<u32>,
        filters: Option<&Filters>,
    ) -> Result<Vec<TimerType>, VisomaError> {
        resource::list(&self.http, limit, filters).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_round_trip_keeps_type_keyword_field() {
        let wire = json!({
            "id": 4,
            "title": "Support",
            "description": "Customer support time.",
            "type": 1,
        });
        let kind: TimerType = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(kind.kind, Some(1));
        assert_eq!(serde_json::to_value(&kind).unwrap(), wire);
    }
}
