//! Integration tests for the catalog families: ticket statuses, ticket
//! types, timer types and user groups. These managers are read-only and
//! share the search contract, so each family exercises one distinct angle.

mod common;

use pretty_assertions::assert_eq;
use serde_json::json;
use visoma::Filters;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn ticket_statuses_list_decodes_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api2/ticketstatus/search/"))
        .and(query_param("params[QueryLimit]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Id": 1, "Title": "Open", "Default": true},
            {"Id": 2, "Title": "Closed", "Color": "#cccccc"},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let statuses = client.ticket_statuses().list(None, None).await.unwrap();

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].title, "Open");
    assert_eq!(statuses[1].color.as_deref(), Some("#cccccc"));
}

#[tokio::test]
async fn ticket_statuses_get_not_found_names_resource() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api2/ticketstatus/search/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"Message": "No TicketStatus found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let filters = Filters::new().with("title", "Lost");
    let err = client.ticket_statuses().get(&filters).await.unwrap_err();

    assert!(err.to_string().starts_with("Ticket status not found:"));
}

#[tokio::test]
async fn ticket_types_get_returns_sole_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api2/tickettype/search/"))
        .and(query_param("params[title]", "incident"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Id": 2, "Title": "Incident", "Description": "Unplanned interruption.", "Active": true},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let filters = Filters::new().with("title", "Incident");
    let kind = client.ticket_types().get(&filters).await.unwrap();

    assert_eq!(kind.id, 2);
    assert_eq!(kind.active, Some(true));
}

#[tokio::test]
async fn timer_types_list_decodes_lowercase_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api2/timertype/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 4, "title": "Support", "description": "Customer support time.", "type": 1},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let kinds = client.timer_types().list(None, None).await.unwrap();

    assert_eq!(kinds.len(), 1);
    assert_eq!(kinds[0].kind, Some(1));
}

#[tokio::test]
async fn user_groups_get_more_than_one_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api2/usergroups/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 9, "title": "Support", "active": true},
            {"id": 10, "title": "Development", "active": true},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let filters = Filters::new().with("active", "true");
    let err = client.user_groups().get(&filters).await.unwrap_err();

    assert!(err.to_string().starts_with("More than one user group found:"));
}
