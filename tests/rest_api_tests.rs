//! HTTP-level tests for the dashboard API router

use axum_test::TestServer;
use opsboard::prelude::*;
use serde_json::Value;
use std::sync::Arc;

fn test_server() -> TestServer {
    let state = AppState {
        store: Arc::new(OrderStore::new()),
    };
    TestServer::new(build_router(state))
}

#[tokio::test]
async fn health_endpoints_respond_ok() {
    let server = test_server();

    for path in ["/health", "/healthz"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

#[tokio::test]
async fn orders_default_page() {
    let server = test_server();

    let response = server.get("/orders").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 137);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 10);
    assert_eq!(body["totalPages"], 14);
    assert_eq!(body["items"].as_array().unwrap().len(), 10);
    assert_eq!(body["query"]["status"], "all");
    assert_eq!(body["query"]["dir"], "desc");
}

#[tokio::test]
async fn orders_filters_sorts_and_paginates_from_the_url() {
    let server = test_server();

    let response = server
        .get("/orders")
        .add_query_param("status", "Pending")
        .add_query_param("sort", "user")
        .add_query_param("dir", "asc")
        .add_query_param("pageSize", "5")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let items = body["items"].as_array().unwrap();
    assert!(items.len() <= 5);
    for item in items {
        assert_eq!(item["status"], "Pending");
    }
    let users: Vec<&str> = items.iter().map(|i| i["user"].as_str().unwrap()).collect();
    let mut sorted = users.clone();
    sorted.sort_unstable();
    assert_eq!(users, sorted);
}

#[tokio::test]
async fn adversarial_parameters_never_produce_an_error_status() {
    let server = test_server();

    let response = server
        .get("/orders")
        .add_query_param("page", "abc")
        .add_query_param("pageSize", "-5")
        .add_query_param("status", "bogus")
        .add_query_param("sort", "nope")
        .add_query_param("dir", "up")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 5);
    assert_eq!(body["query"]["status"], "all");
    assert_eq!(body["query"]["sort"], "date");
    assert_eq!(body["query"]["dir"], "desc");
}

#[tokio::test]
async fn page_past_the_end_is_clamped_not_empty() {
    let server = test_server();

    let response = server.get("/orders").add_query_param("page", "999").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["page"], 14);
    assert_eq!(body["query"]["page"], 14);
    assert_eq!(body["items"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn id_search_over_http() {
    let server = test_server();

    let response = server.get("/orders").add_query_param("q", "cm9801").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["id"], "#CM9801");
    assert!(body["items"][0]["avatarSrc"].as_str().unwrap().starts_with("/avatar-"));
}

#[tokio::test]
async fn statuses_endpoint_lists_the_closed_vocabulary() {
    let server = test_server();

    let response = server.get("/orders/statuses").await;
    response.assert_status_ok();

    let body: Vec<String> = response.json();
    assert_eq!(
        body,
        vec!["In Progress", "Complete", "Pending", "Approved", "Rejected"]
    );
}

#[tokio::test]
async fn dashboard_summary_shape() {
    let server = test_server();

    let response = server.get("/dashboard").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["stats"].as_array().unwrap().len(), 4);
    assert_eq!(body["stats"][0]["title"], "Customers");
    assert_eq!(body["revenue"]["currentWeek"], 58211);
    assert_eq!(body["revenue"]["monthly"].as_array().unwrap().len(), 6);
    assert_eq!(body["projections"][3]["value"], 28_000_000);
    assert_eq!(body["topProducts"].as_array().unwrap().len(), 5);
    assert_eq!(body["sales"][0]["label"], "Direct");
}

#[tokio::test]
async fn unknown_route_returns_the_error_payload() {
    let server = test_server();

    let response = server.get("/nope/nothing").await;
    assert_eq!(response.status_code(), 404);

    let body: Value = response.json();
    assert_eq!(body["code"], "ROUTE_NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("/nope/nothing"));
}
