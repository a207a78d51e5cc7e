//! Error types for the Visoma client.
//!
//! This module defines `VisomaError`, the unified error type used throughout
//! the crate. Every failure is raised immediately to the caller; nothing is
//! retried or swallowed.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for all Visoma operations.
///
/// Each variant carries the context needed to act on the failure without
/// having to parse the message text.
#[derive(Error, Debug)]
pub enum VisomaError {
    /// Configuration error - missing or invalid environment values.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// HTTP response returned a status outside the 2xx/3xx ranges.
    #[error("{}: {}", .status.as_u16(), .body)]
    Http {
        /// The HTTP status code returned.
        status: StatusCode,
        /// The raw response body text.
        body: String,
    },

    /// A `get` matched no record.
    #[error("{resource} not found: '{filters}'")]
    NotFound {
        /// Display name of the resource, capitalized (e.g. "Ticket").
        resource: String,
        /// The filters that matched nothing.
        filters: String,
    },

    /// A `get` matched more than one record.
    #[error("More than one {resource} found: {records}")]
    TooManyResults {
        /// Display name of the resource (e.g. "ticket").
        resource: String,
        /// The records that matched.
        records: String,
    },

    /// The service reported a domain error via its `Message` envelope.
    #[error("{0}")]
    Server(String),

    /// A well-formed response failed strict decoding into a record type.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered with a redirect where a body was expected.
    #[error("empty response where a body was expected")]
    EmptyResponse,

    /// The expected id pattern was absent from an HTML page (workdays only).
    #[error("could not extract workday id from HTML: {0}")]
    Scrape(String),
}

impl VisomaError {
    /// Creates a configuration error listing missing environment variables.
    pub fn missing_env(names: &[&str]) -> Self {
        VisomaError::Config(format!(
            "missing required environment variables: {}",
            names.join(", ")
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        VisomaError::Config(message.into())
    }

    /// Creates a not-found error for a resource and the filters that missed.
    pub fn not_found(resource: &str, filters: impl fmt::Display) -> Self {
        VisomaError::NotFound {
            resource: capitalize(resource),
            filters: filters.to_string(),
        }
    }

    /// Creates a too-many-results error naming the resource and the matches.
    pub fn too_many(resource: &str, records: impl fmt::Debug) -> Self {
        VisomaError::TooManyResults {
            resource: resource.to_string(),
            records: format!("{records:?}"),
        }
    }

    /// Creates a server-reported domain error.
    pub fn server(message: impl Into<String>) -> Self {
        VisomaError::Server(message.into())
    }

    /// Creates a scrape error carrying the HTML that lacked the pattern.
    pub fn scrape(html: impl Into<String>) -> Self {
        VisomaError::Scrape(html.into())
    }
}

/// Uppercases the first character for sentence-position resource names.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
