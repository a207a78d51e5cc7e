//! Projects maintained by the Visoma service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::VisomaError;
use crate::http::HttpClient;
use crate::params::Filters;
use crate::resource::{self, Resource};

/// Details for a project managed by the Visoma service.
///
/// Project dates travel in the service's `DD.MM.YYYY` form, unlike the
/// ISO timestamps used everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project id.
    #[serde(rename = "Id")]
    pub id: i64,

    /// Project title.
    #[serde(rename = "Title")]
    pub title: String,

    /// Project description.
    #[serde(rename = "Description")]
    pub description: String,

    /// First day of the project.
    #[serde(
        rename = "Begin",
        default,
        with = "codec::date_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub begin: Option<NaiveDate>,

    /// Project deadline.
    #[serde(
        rename = "Deadline",
        default,
        with = "codec::date_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<NaiveDate>,

    /// Whether the project is archived.
    #[serde(rename = "Archived", default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    /// Accumulated duration.
    #[serde(rename = "Duration", default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    /// Ids of the tickets linked to the project.
    #[serde(rename = "TicketIds", default, skip_serializing_if = "Option::is_none")]
    pub ticket_ids: Option<Vec<i64>>,
}

impl Resource for Project {
    const NAME: &'static str = "project";
    const SEARCH_PATH: &'static str = "/api2/project/search/";
}

/// Manager for project resources.
#[derive(Debug, Clone)]
pub struct ProjectsManager {
    http: HttpClient,
}

impl ProjectsManager {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Returns the single project matching the filters.
    pub async fn get(&self, filters: &Filters) -> Result<Project, VisomaError> {
        resource::get(&self.http, filters).await
    }

    /// Reports on projects.
    ///
    /// # Arguments
    ///
    /// * `limit` - Fetch projects up to this limit. The default fetches 2
    ///   projects.
    /// * `filters` - Criteria to filter the project list.
    pub async fn list(
        &self,
        limit: Option<u32>,
        filters: Option<&Filters>,
    ) -> Result<Vec<Project>, VisomaError> {
        resource::list(&self.http, limit, filters).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn first_project() -> serde_json::Value {
        json!({
            "Id": 6,
            "Title": "Project 6",
            "Description": "The first test project.",
            "Begin": "08.01.2024",
            "TicketIds": [1, 2],
        })
    }

    #[test]
    fn test_decode_parses_service_date_format() {
        let project: Project = serde_json::from_value(first_project()).unwrap();
        assert_eq!(project.begin, NaiveDate::from_ymd_opt(2024, 1, 8));
        assert_eq!(project.deadline, None);
        assert_eq!(project.ticket_ids, Some(vec![1, 2]));
    }

    #[test]
    fn test_round_trip_keeps_service_date_format() {
        let project: Project = serde_json::from_value(first_project()).unwrap();
        assert_eq!(serde_json::to_value(&project).unwrap(), first_project());
    }

    #[test]
    fn test_iso_date_is_rejected() {
        let mut wire = first_project();
        wire["Begin"] = json!("2024-01-08");
        assert!(serde_json::from_value::<Project>(wire).is_err());
    }
}
