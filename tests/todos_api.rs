//! Integration tests for the todo API client against a mock HTTP server.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tododesk::egui_app::{Config, TodoApiClient};
use tododesk::shared::todo::{SortOrder, TodoUpdate};
use tododesk::shared::TransportError;

fn todo_json(id: u64, completed: bool) -> serde_json::Value {
    json!({
        "userId": 1,
        "id": id,
        "title": format!("todo {}", id),
        "completed": completed,
    })
}

async fn client_for(server: &MockServer) -> TodoApiClient {
    TodoApiClient::new(Config::with_server_url(server.uri()))
}

#[tokio::test]
async fn test_fetch_todos_sends_pagination_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(query_param("_page", "2"))
        .and(query_param("_limit", "25"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([todo_json(26, false), todo_json(27, true)]))
                .append_header("x-total-count", "200"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (todos, total) = client
        .fetch_todos_paginated(2, 25, None, SortOrder::Asc)
        .await
        .unwrap();

    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].id, 26);
    assert!(todos[1].completed);
    assert_eq!(total, 200);
}

#[tokio::test]
async fn test_fetch_todos_sends_sort_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(query_param("_sort", "completed"))
        .and(query_param("_order", "desc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([todo_json(1, true)]))
                .append_header("x-total-count", "1"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (todos, total) = client
        .fetch_todos_paginated(1, 10, Some("completed"), SortOrder::Desc)
        .await
        .unwrap();

    assert_eq!(todos.len(), 1);
    assert_eq!(total, 1);
}

#[tokio::test]
async fn test_fetch_todos_missing_total_header_defaults_to_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (todos, total) = client
        .fetch_todos_paginated(1, 25, None, SortOrder::Asc)
        .await
        .unwrap();

    assert!(todos.is_empty());
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_fetch_todos_http_error_carries_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(json!({"message": "maintenance window", "code": "MAINT"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client
        .fetch_todos_paginated(1, 25, None, SortOrder::Asc)
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(503));
    assert_eq!(error.code(), Some("MAINT"));
    assert!(error.to_string().contains("maintenance window"));
}

#[tokio::test]
async fn test_fetch_todos_network_error() {
    // Port 1 is never listening.
    let client = TodoApiClient::new(Config::with_server_url("http://127.0.0.1:1"));
    let error = client
        .fetch_todos_paginated(1, 25, None, SortOrder::Asc)
        .await
        .unwrap_err();

    assert!(matches!(error, TransportError::Network { .. }));
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn test_fetch_todos_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client
        .fetch_todos_paginated(1, 25, None, SortOrder::Asc)
        .await
        .unwrap_err();

    assert!(matches!(error, TransportError::Decode { .. }));
}

#[tokio::test]
async fn test_update_todo_patches_one_record() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/todos/7"))
        .and(body_json(json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(todo_json(7, true)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let todo = client
        .update_todo(7, TodoUpdate { completed: true })
        .await
        .unwrap();

    assert_eq!(todo.id, 7);
    assert!(todo.completed);
}

#[tokio::test]
async fn test_batch_update_isolates_failures() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(todo_json(1, true)))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/todos/2"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "write failed"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/todos/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(todo_json(3, true)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let updates = vec![
        (1, TodoUpdate { completed: true }),
        (2, TodoUpdate { completed: true }),
        (3, TodoUpdate { completed: true }),
    ];
    let results = client.batch_update_todos(updates).await;

    // One result per entry, correlatable by id.
    assert_eq!(results.len(), 3);

    let by_id = |id: u64| results.iter().find(|r| r.id == id).unwrap();
    assert!(by_id(1).success);
    assert!(by_id(3).success);
    assert!(by_id(1).todo.as_ref().unwrap().completed);

    let failed = by_id(2);
    assert!(!failed.success);
    assert!(failed.todo.is_none());
    assert!(failed.error.as_ref().unwrap().contains("write failed"));
}

#[tokio::test]
async fn test_batch_update_empty_input_issues_no_requests() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and fail the result below.

    let client = client_for(&server).await;
    let results = client.batch_update_todos(Vec::new()).await;
    assert!(results.is_empty());
}
