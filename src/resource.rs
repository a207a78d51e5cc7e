//! The request/response contract shared by every resource manager.
//!
//! Each manager pairs a record type with the generic operations here, so
//! the search convention, the single-vs-multiple policy for `get`, and the
//! mutation-result handling are written once.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::VisomaError;
use crate::http::HttpClient;
use crate::params::{search_params, Filters};

/// A record type served by one of the service's search endpoints.
pub(crate) trait Resource: DeserializeOwned + Debug {
    /// Lowercase display name used in error messages (e.g. "ticket").
    const NAME: &'static str;

    /// Search endpoint for the resource family.
    const SEARCH_PATH: &'static str;
}

/// The uniform response returned by all mutating endpoints.
///
/// Decoded values always carry `success == true`; a failed operation is
/// surfaced as [`VisomaError::Server`] with the payload's message instead,
/// since the id field is meaningless on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Whether the operation succeeded.
    #[serde(rename = "Success")]
    pub success: bool,

    /// Server-assigned id of the affected record.
    #[serde(rename = "Id")]
    pub id: i64,

    /// Informational message from the service.
    #[serde(rename = "Message")]
    pub message: String,
}

/// Lists records matching the filters, up to the limit.
pub(crate) async fn list<R: Resource>(
    http: &HttpClient,
    limit: Option<u32>,
    filters: Option<&Filters>,
) -> Result<Vec<R>, VisomaError> {
    tracing::debug!(resource = R::NAME, "listing");

    let params = search_params(filters, limit);
    let payload = http
        .get_json(R::SEARCH_PATH, Some(&params))
        .await?
        .ok_or(VisomaError::EmptyResponse)?;

    decode_records(payload)
}

/// Returns the single record matching the filters.
///
/// Zero matches (the service answers with its message envelope, or with an
/// empty array) is a not-found error; more than one match is an error
/// naming the resource. There is no ranking between matches.
pub(crate) async fn get<R: Resource>(
    http: &HttpClient,
    filters: &Filters,
) -> Result<R, VisomaError> {
    tracing::debug!(resource = R::NAME, %filters, "getting");

    let records = match list::<R>(http, None, Some(filters)).await {
        Ok(records) => records,
        Err(VisomaError::Server(_)) => return Err(VisomaError::not_found(R::NAME, filters)),
        Err(err) => return Err(err),
    };

    single(records, filters)
}

/// Creates a record by posting the serialized write request.
pub(crate) async fn create<B>(
    http: &HttpClient,
    path: &str,
    request: &B,
) -> Result<OperationResult, VisomaError>
where
    B: Serialize + ?Sized,
{
    let payload = http
        .post_json(path, request)
        .await?
        .ok_or(VisomaError::EmptyResponse)?;

    operation_result(payload)
}

/// Deletes the record at the given endpoint path.
pub(crate) async fn delete(
    http: &HttpClient,
    path: &str,
) -> Result<OperationResult, VisomaError> {
    let payload = http
        .delete_json(path)
        .await?
        .ok_or(VisomaError::EmptyResponse)?;

    operation_result(payload)
}

/// Decodes a search payload into records.
///
/// The service reports empty and erroneous searches alike by replacing the
/// array with a `{"Message": ...}` envelope, so that discriminant is
/// checked before strict decoding.
fn decode_records<R: Resource>(payload: Value) -> Result<Vec<R>, VisomaError> {
    if let Some(message) = envelope_message(&payload) {
        return Err(VisomaError::server(message));
    }

    Ok(serde_json::from_value(payload)?)
}

/// Decodes a mutation payload, checking the `Success` discriminant first.
fn operation_result(payload: Value) -> Result<OperationResult, VisomaError> {
    if payload.get("Success").and_then(Value::as_bool) != Some(true) {
        let message = envelope_message(&payload)
            .map(str::to_owned)
            .unwrap_or_else(|| payload.to_string());
        return Err(VisomaError::server(message));
    }

    Ok(serde_json::from_value(payload)?)
}

fn envelope_message(payload: &Value) -> Option<&str> {
    payload.as_object()?.get("Message")?.as_str()
}

fn single<R: Resource>(mut records: Vec<R>, filters: &Filters) -> Result<R, VisomaError> {
    if records.len() > 1 {
        return Err(VisomaError::too_many(R::NAME, &records));
    }

    records
        .pop()
        .ok_or_else(|| VisomaError::not_found(R::NAME, filters))
}
