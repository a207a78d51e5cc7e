//! Client for connecting to a Visoma service.

use crate::config::Config;
use crate::error::VisomaError;
use crate::http::HttpClient;
use crate::projects::ProjectsManager;
use crate::ticket_statuses::TicketStatusesManager;
use crate::ticket_types::TicketTypesManager;
use crate::tickets::TicketsManager;
use crate::timer_types::TimerTypesManager;
use crate::timers::TimersManager;
use crate::user_groups::UserGroupsManager;
use crate::users::UsersManager;
use crate::workdays::WorkdaysManager;

/// Client to connect to a Visoma service.
///
/// The client owns the one connection pool; every manager created from it
/// shares that pool by holding a cheap clone of the transport. The pool is
/// released when the client and all managers have dropped.
///
/// # Example
///
/// ```ignore
/// use visoma::{Filters, VisomaClient};
///
/// async fn example() -> Result<(), visoma::VisomaError> {
///     let client = VisomaClient::from_env()?;
///
///     let filters = Filters::new().with("title", "Printer not working");
///     let ticket = client.tickets().get(&filters).await?;
///     println!("#{}: {}", ticket.number, ticket.title);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct VisomaClient {
    http: HttpClient,
    user: String,
}

impl VisomaClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `VisomaError::Config` for invalid credentials or
    /// `VisomaError::HttpClient` when the transport fails to initialize.
    pub fn new(config: &Config) -> Result<Self, VisomaError> {
        Ok(Self {
            http: HttpClient::new(config)?,
            user: config.user.clone(),
        })
    }

    /// Creates a client configured from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `VISOMA_HOST`: Fully-qualified domain name of the Visoma service
    /// - `VISOMA_USER`: The user name for the Visoma login
    /// - `VISOMA_PASSWORD`: The user's password for the Visoma login
    ///
    /// # Errors
    ///
    /// Returns `VisomaError::Config` naming every missing variable.
    pub fn from_env() -> Result<Self, VisomaError> {
        let config = Config::from_env()?;
        Self::new(&config)
    }

    /// The user name requests are authenticated as.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns a manager for operations on tickets.
    pub fn tickets(&self) -> TicketsManager {
        TicketsManager::new(self.http.clone())
    }

    /// Returns a manager for operations on ticket statuses.
    pub fn ticket_statuses(&self) -> TicketStatusesManager {
        TicketStatusesManager::new(self.http.clone())
    }

    /// Returns a manager for operations on ticket types.
    pub fn ticket_types(&self) -> TicketTypesManager {
        TicketTypesManager::new(self.http.clone())
    }

    /// Returns a manager for operations on timers.
    pub fn timers(&self) -> TimersManager {
        TimersManager::new(self.http.clone())
    }

    /// Returns a manager for operations on timer types.
    pub fn timer_types(&self) -> TimerTypesManager {
        TimerTypesManager::new(self.http.clone())
    }

    /// Returns a manager for operations on users.
    pub fn users(&self) -> UsersManager {
        UsersManager::new(self.http.clone())
    }

    /// Returns a manager for operations on user groups.
    pub fn user_groups(&self) -> UserGroupsManager {
        UserGroupsManager::new(self.http.clone())
    }

    /// Returns a manager for operations on workdays.
    pub fn workdays(&self) -> WorkdaysManager {
        WorkdaysManager::new(self.http.clone())
    }

    /// Returns a manager for operations on projects.
    pub fn projects(&self) -> ProjectsManager {
        ProjectsManager::new(self.http.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_remembers_user() {
        let config = Config::new("visoma.example.com", "user1", "secret").unwrap();
        let client = VisomaClient::new(&config).unwrap();
        assert_eq!(client.user(), "user1");
    }

    #[test]
    fn test_debug_does_not_expose_password() {
        let config = Config::new("visoma.example.com", "user1", "secret").unwrap();
        let client = VisomaClient::new(&config).unwrap();
        assert!(!format!("{client:?}").contains("secret"));
    }
}
