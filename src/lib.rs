//! # Visoma
//!
//! Typed client library for the Visoma ticketing and time tracking web
//! service.
//!
//! The crate exposes one manager per resource family (tickets, timers,
//! users, projects, ...) that translates method calls into HTTP requests
//! against the service's REST-like API and parses JSON responses into
//! typed records.
//!
//! ## Features
//!
//! - **Search**: `list` and `get` with filter criteria on every family
//! - **Mutations**: create tickets and timers, delete timers
//! - **Legacy endpoints**: close timers and workdays through the HTML
//!   pages the service never wrapped in an API
//! - **Typed errors**: configuration, transport, not-found and
//!   server-reported failures are distinct [`VisomaError`] variants
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - The unified error type
//! - [`client`] - The facade owning the shared HTTP transport
//! - [`params`] - Filter and limit normalization for search endpoints
//! - one module per resource family ([`tickets`], [`timers`], [`users`],
//!   [`projects`], [`ticket_statuses`], [`ticket_types`], [`timer_types`],
//!   [`user_groups`], [`workdays`])
//!
//! Requests flow facade → manager → shared request/response contract →
//! transport; status-code semantics and the single-vs-multiple result
//! policy are decided in exactly one place each.
//!
//! ## Configuration
//!
//! Three environment variables are required:
//!
//! - `VISOMA_HOST`: Fully-qualified domain name of the Visoma service
//! - `VISOMA_USER`: The user name for the Visoma login
//! - `VISOMA_PASSWORD`: The user's password for the Visoma login
//!
//! The credentials are sent as request headers and are never logged.
//!
//! ## Example
//!
//! ```ignore
//! use visoma::{Filters, VisomaClient};
//!
//! async fn example() -> Result<(), visoma::VisomaError> {
//!     let client = VisomaClient::from_env()?;
//!
//!     // List up to ten open tickets
//!     let filters = Filters::new().with("status", "Open");
//!     let tickets = client.tickets().list(Some(10), Some(&filters)).await?;
//!     for ticket in tickets {
//!         println!("#{}: {}", ticket.number, ticket.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod projects;
pub mod ticket_statuses;
pub mod ticket_types;
pub mod tickets;
pub mod timer_types;
pub mod timers;
pub mod user_groups;
pub mod users;
pub mod workdays;

mod codec;
mod http;
mod resource;

pub use client::VisomaClient;
pub use config::Config;
pub use error::VisomaError;
pub use params::Filters;
pub use resource::OperationResult;
