//! REST client and list controllers against an in-process mock backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use registry_console::application::{LocalList, ReleasePages, RemoteList, UserPages};
use registry_console::domain::{
    CreateClientAccessRequest, CreateUserRequest, ListUsersParams, PackageKind,
};
use registry_console::shared::{ApiError, PageRequest, RetryConfig};
use registry_console::{ConsoleClient, PaginationState};

#[derive(Clone, Default)]
struct Backend {
    hits: Arc<AtomicU32>,
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> ConsoleClient {
    ConsoleClient::builder(base_url)
        .token(Some("secret-token".into()))
        .timeout(Duration::from_secs(5))
        .retry(RetryConfig {
            max_attempts: 3,
            initial_delay: Duration::from_millis(5),
            backoff_multiplier: 2.0,
            max_delay: Duration::from_millis(20),
        })
        .build()
        .unwrap()
}

fn user_json(n: u64) -> Value {
    json!({
        "id": format!("u{n}"),
        "username": format!("user{n}"),
        "email": format!("user{n}@example.com"),
        "roles": ["viewer"],
        "is_active": true,
        "created_at": "2026-02-01T12:00:00Z"
    })
}

/// 45 users, paginated like the real backend; requires the bearer token.
async fn list_users(
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "Bearer secret-token");
    if !authorized {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let total: u64 = if query.get("search").map(String::as_str) == Some("user4") {
        6
    } else {
        45
    };
    let page: u64 = query["page"].parse().unwrap();
    let page_size: u64 = query["page_size"].parse().unwrap();
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total);
    let list: Vec<Value> = (start..end.max(start)).map(|n| user_json(n + 1)).collect();

    Ok(Json(json!({
        "list": list,
        "total": total,
        "page": page,
        "page_size": page_size,
        "total_pages": total.div_ceil(page_size),
    })))
}

#[tokio::test]
async fn test_user_list_is_paginated_by_backend() {
    let base = spawn(Router::new().route("/api/v1/users", get(list_users))).await;
    let source = UserPages::new(client(&base), ListUsersParams::default());
    let mut list = RemoteList::new(source, PaginationState::new(1, 20));

    list.refresh().await.unwrap();
    assert_eq!(list.items().len(), 20);
    assert_eq!(list.state().total_pages(), 3);

    list.set_page(3).await.unwrap();
    assert_eq!(list.items().len(), 5);
    assert_eq!(list.items()[0].username, "user41");
    assert_eq!(list.summary(), "Showing 41-45 of 45");
}

#[tokio::test]
async fn test_search_filter_is_forwarded_to_backend() {
    let base = spawn(Router::new().route("/api/v1/users", get(list_users))).await;
    let params = ListUsersParams {
        search: Some("user4".into()),
        ..ListUsersParams::default()
    };
    let mut list = RemoteList::new(UserPages::new(client(&base), params), PaginationState::new(1, 5));

    list.refresh().await.unwrap();
    assert_eq!(list.state().total_items(), 6);

    list.next_page().await.unwrap();
    assert_eq!(list.state().current_page(), 2);
    assert_eq!(list.items().len(), 1);
}

/// Users endpoint whose row count can be changed between requests.
async fn shrinking_users(
    State(total): State<Arc<AtomicU64>>,
    Query(page): Query<PageRequest>,
) -> Json<Value> {
    let total = total.load(Ordering::SeqCst);
    let start = u64::from(page.page - 1) * u64::from(page.page_size);
    let end = (start + u64::from(page.page_size)).min(total);
    let list: Vec<Value> = (start..end.max(start)).map(|n| user_json(n + 1)).collect();
    Json(json!({
        "list": list,
        "total": total,
        "page": page.page,
        "page_size": page.page_size,
    }))
}

#[tokio::test]
async fn test_backend_total_shrinks_and_page_is_clamped() {
    let total = Arc::new(AtomicU64::new(45));
    let router = Router::new()
        .route("/api/v1/users", get(shrinking_users))
        .with_state(total.clone());
    let base = spawn(router).await;
    let source = UserPages::new(client(&base), ListUsersParams::default());
    let mut list = RemoteList::new(source, PaginationState::new(1, 10));

    list.refresh().await.unwrap();
    list.set_page(5).await.unwrap();
    assert_eq!(list.items()[0].username, "user41");

    // Users were deleted elsewhere; page 5 no longer exists.
    total.store(12, Ordering::SeqCst);
    list.refresh().await.unwrap();

    assert_eq!(list.state().current_page(), 2);
    assert_eq!(list.state().total_pages(), 2);
    assert_eq!(list.items().len(), 2);
    assert_eq!(list.items()[0].username, "user11");
    assert_eq!(list.summary(), "Showing 11-12 of 12");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let base = spawn(Router::new().route("/api/v1/users", get(list_users))).await;
    let anonymous = ConsoleClient::builder(&base).build().unwrap();

    let err = anonymous
        .users()
        .list(&ListUsersParams::default(), PageRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized(_)));
}

async fn flaky_roles(State(backend): State<Backend>) -> Result<Json<Value>, StatusCode> {
    let hit = backend.hits.fetch_add(1, Ordering::SeqCst) + 1;
    if hit < 3 {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    Ok(Json(json!([
        {"id": "r1", "name": "admin", "permissions": ["*"]},
        {"id": "r2", "name": "viewer", "permissions": ["packages:read"]}
    ])))
}

#[tokio::test]
async fn test_get_is_retried_on_transient_failure() {
    let backend = Backend::default();
    let router = Router::new()
        .route("/api/v1/roles", get(flaky_roles))
        .with_state(backend.clone());
    let base = spawn(router).await;

    let roles = client(&base).roles().list().await.unwrap();

    assert_eq!(roles.len(), 2);
    assert!(roles[0].grants("anything:at-all"));
    assert_eq!(backend.hits.load(Ordering::SeqCst), 3);
}

async fn overloaded(State(backend): State<Backend>) -> (StatusCode, Json<Value>) {
    backend.hits.fetch_add(1, Ordering::SeqCst);
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({"error": "maintenance window"})),
    )
}

#[tokio::test]
async fn test_mutations_are_not_retried() {
    let backend = Backend::default();
    let router = Router::new()
        .route("/api/v1/tenants", post(overloaded))
        .with_state(backend.clone());
    let base = spawn(router).await;

    let err = client(&base)
        .tenants()
        .create(&registry_console::domain::CreateTenantRequest {
            name: "acme".into(),
            description: None,
        })
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance window");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(backend.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalid_request_never_reaches_backend() {
    let backend = Backend::default();
    let router = Router::new()
        .route("/api/v1/users", post(overloaded))
        .with_state(backend.clone());
    let base = spawn(router).await;

    let err = client(&base)
        .users()
        .create(&CreateUserRequest {
            username: "jo".into(),
            email: "not-an-email".into(),
            password: "short".into(),
            display_name: None,
            tenant_id: None,
            roles: vec![],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(backend.hits.load(Ordering::SeqCst), 0);
}

fn release_json(package_id: &str, n: u64) -> Value {
    json!({
        "id": format!("rel{n}"),
        "package_id": package_id,
        "version": format!("1.{n}.0"),
        "file_name": format!("tool-1.{n}.0.tgz"),
        "size_bytes": 1536 * n,
        "published_at": "2026-04-01T08:30:00Z"
    })
}

async fn list_releases(
    Path(package_id): Path<String>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Value>, StatusCode> {
    if package_id != "pkg1" {
        return Err(StatusCode::NOT_FOUND);
    }
    let total = 12u64;
    let start = u64::from(page.page - 1) * u64::from(page.page_size);
    let end = (start + u64::from(page.page_size)).min(total);
    let list: Vec<Value> = (start..end.max(start))
        .map(|n| release_json(&package_id, n + 1))
        .collect();
    Ok(Json(json!({
        "list": list,
        "total": total,
        "page": page.page,
        "page_size": page.page_size,
    })))
}

#[tokio::test]
async fn test_release_pages_and_not_found() {
    let router = Router::new().route("/api/v1/packages/{id}/releases", get(list_releases));
    let base = spawn(router).await;
    let client = client(&base);

    let mut list = RemoteList::new(
        ReleasePages::new(client.clone(), "pkg1"),
        PaginationState::new(1, 10),
    );
    list.refresh().await.unwrap();
    list.next_page().await.unwrap();

    assert_eq!(list.items().len(), 2);
    assert_eq!(list.items()[1].version, "1.12.0");
    assert_eq!(list.items()[1].display_size(), "18 KB");
    assert_eq!(list.summary(), "Showing 11-12 of 12");

    let err = client
        .releases()
        .list("missing", PageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

async fn list_packages(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    let project = query.get("project_id").cloned().unwrap_or_default();
    let packages: Vec<Value> = (1..=30)
        .map(|n| {
            json!({
                "id": format!("p{n}"),
                "project_id": project,
                "name": if n % 3 == 0 { format!("docker-image-{n}") } else { format!("lib-{n}") },
                "kind": if n % 3 == 0 { "docker" } else { "npm" },
                "updated_at": "2026-04-01T08:30:00Z"
            })
        })
        .collect();
    Json(Value::Array(packages))
}

#[tokio::test]
async fn test_packages_are_paginated_locally() {
    let base = spawn(Router::new().route("/api/v1/packages", get(list_packages))).await;

    let packages = client(&base).packages().list(Some("proj-7")).await.unwrap();
    assert!(packages.iter().all(|p| p.project_id == "proj-7"));

    let mut list = LocalList::with_items(PaginationState::new(1, 4), packages);
    list.apply_filter(|p| p.kind == PackageKind::Docker);

    assert_eq!(list.len(), 10);
    assert_eq!(list.state().total_pages(), 3);
    list.set_page(3);
    let names: Vec<&str> = list.visible().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["docker-image-27", "docker-image-30"]);
}

async fn create_access(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(json!({
            "id": "ca1",
            "name": body["name"],
            "client_id": "ci-build-01",
            "scopes": body["scopes"],
            "created_at": "2026-05-05T00:00:00Z",
            "client_secret": "s3cr3t"
        })),
    )
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[tokio::test]
async fn test_client_access_create_and_delete() {
    let router = Router::new()
        .route("/api/v1/client-access", post(create_access))
        .route("/api/v1/client-access/{id}", delete(no_content));
    let base = spawn(router).await;
    let client = client(&base);

    let created = client
        .client_access()
        .create(&CreateClientAccessRequest {
            name: "ci".into(),
            scopes: vec!["packages:write".into()],
            expires_in_days: Some(90),
        })
        .await
        .unwrap();

    assert_eq!(created.client_secret, "s3cr3t");
    assert_eq!(created.access.scopes, vec!["packages:write"]);
    assert!(!created.access.revoked);

    client.client_access().delete("ca1").await.unwrap();
}
