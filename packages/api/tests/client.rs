//! End-to-end tests of `ApiClient` against an in-process axum server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use api::{
    ApiClient, ApiConfig, ApiError, PageCursor, PageSource, ReceiptFlag, ReceiptQuery, UserFilter,
    UserQuery,
};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
struct Recorded {
    path: String,
    params: Vec<(String, String)>,
    authorization: Option<String>,
}

#[derive(Clone)]
struct Server {
    base: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Server {
    fn record(&self, path: &str, params: &[(String, String)], headers: &HeaderMap) {
        self.requests.lock().unwrap().push(Recorded {
            path: path.to_string(),
            params: params.to_vec(),
            authorization: headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        });
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Token T")
}

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn user_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "initials": "AG",
        "fullName": name,
        "firstName": "Ana",
        "lastName": "Garcia",
        "email": "ana@example.com",
        "phoneNumber": "0981 000 000",
        "employeeNumber": 7,
        "role": "Funcionario",
        "isSuperuser": false
    })
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == "secret" {
        Json(json!({ "token": "T", "user": user_json("1", "Ana Garcia") })).into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "non_field_errors": ["Unable to log in with provided credentials."] })),
        )
            .into_response()
    }
}

async fn users(
    State(server): State<Server>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    server.record("/users/", &params, &headers);
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Invalid token." })))
            .into_response();
    }
    if param(&params, "search") == Some("slow") {
        tokio::time::sleep(Duration::from_secs(2)).await;
    }
    if param(&params, "search") == Some("nadie") {
        return Json(json!({ "results": [], "numPages": 1, "totalCount": 0, "next": null, "previous": null }))
            .into_response();
    }
    let next = format!("{}/users/?page=2&sort=employeeNumber", server.base);
    let (results, next, previous) = if param(&params, "page") == Some("2") {
        (vec![user_json("3", "Carla Ruiz")], Value::Null, json!(format!("{}/users/?page=1", server.base)))
    } else {
        (
            vec![user_json("1", "Ana Garcia"), user_json("2", "Beto Garcia")],
            json!(next),
            Value::Null,
        )
    };
    Json(json!({
        "results": results,
        "numPages": 2,
        "totalCount": 3,
        "count": 3,
        "next": next,
        "previous": previous,
    }))
    .into_response()
}

async fn receipts(
    State(server): State<Server>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    server.record("/receipts/", &params, &headers);
    if param(&params, "search") == Some("broken") {
        return "not json".into_response();
    }
    if param(&params, "search") == Some("boom") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>").into_response();
    }
    Json(json!({
        "results": [{
            "id": "r-1",
            "type": "Sueldo",
            "employeeFullName": "Ana Garcia",
            "employeeNumber": "7",
            "year": 2024,
            "month": 3,
            "isSended": true,
            "isReaded": false,
            "isSigned": false,
            "sendedDate": "2024-03-31T10:00:00Z",
            "readedDate": null,
            "signedDate": null
        }],
        "next": null,
        "previous": null
    }))
    .into_response()
}

async fn receipt_file(
    State(server): State<Server>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    server.record(&format!("/receipts/{id}/file"), &[], &headers);
    if id == "r-1" {
        Json(json!({ "file": "https://files.example.com/r-1.pdf" })).into_response()
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response()
    }
}

async fn start() -> Server {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = Server {
        base: format!("http://{addr}/api"),
        requests: Arc::new(Mutex::new(Vec::new())),
    };

    let router = Router::new()
        .route("/api/users/demo_login/", post(login))
        .route("/api/users/", get(users))
        .route("/api/receipts/", get(receipts))
        .route("/api/receipts/{id}/file", get(receipt_file))
        .with_state(server.clone());

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    server
}

fn client_for(server: &Server) -> ApiClient {
    ApiClient::new(&ApiConfig::new(&server.base)).unwrap()
}

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let server = start().await;
    let client = client_for(&server);

    let response = client.login("ana", "secret").await.unwrap();
    assert_eq!(response.token, "T");
    assert_eq!(response.user.full_name, "Ana Garcia");
    assert_eq!(response.user.employee_number, 7);
}

#[tokio::test]
async fn test_login_with_bad_credentials_is_auth_error() {
    let server = start().await;
    let client = client_for(&server);

    let err = client.login("ana", "wrong").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Auth("Unable to log in with provided credentials.".to_string())
    );
}

#[tokio::test]
async fn test_list_users_sends_token_and_params() {
    let server = start().await;
    let client = client_for(&server);

    let query = UserQuery::new()
        .with_search("garcia")
        .with_filter(UserFilter::Workshift, "Tarde");
    let page = client
        .list_users(&query, &PageCursor::First, "T")
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_count, Some(3));
    assert_eq!(page.num_pages, Some(2));
    assert!(page.has_next());
    assert!(!page.has_previous());

    let recorded = server.requests();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].authorization.as_deref(), Some("Token T"));
    assert_eq!(param(&recorded[0].params, "page"), Some("1"));
    assert_eq!(param(&recorded[0].params, "sort"), Some("employeeNumber"));
    assert_eq!(param(&recorded[0].params, "workshift"), Some("afternoon"));
    assert_eq!(param(&recorded[0].params, "search"), Some("garcia"));
}

#[tokio::test]
async fn test_next_cursor_is_followed_verbatim() {
    let server = start().await;
    let client = client_for(&server);

    let first = client
        .list_users(&UserQuery::new(), &PageCursor::First, "T")
        .await
        .unwrap();
    let next = PageCursor::Link(first.next.clone().unwrap());

    // The query passed alongside a link is ignored; the link is authoritative.
    let second = client
        .list_users(&UserQuery::new().with_search("ignored"), &next, "T")
        .await
        .unwrap();

    assert_eq!(second.items[0].full_name, "Carla Ruiz");
    assert!(!second.has_next());
    assert!(second.has_previous());

    let recorded = server.requests();
    assert_eq!(
        recorded[1].params,
        vec![
            ("page".to_string(), "2".to_string()),
            ("sort".to_string(), "employeeNumber".to_string())
        ]
    );
    assert_eq!(recorded[1].authorization.as_deref(), Some("Token T"));
}

#[tokio::test]
async fn test_empty_results() {
    let server = start().await;
    let client = client_for(&server);

    let page = client
        .list_users(&UserQuery::new().with_search("nadie"), &PageCursor::First, "T")
        .await
        .unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total_count, Some(0));
}

#[tokio::test]
async fn test_rejected_token_is_status_error_with_server_message() {
    let server = start().await;
    let client = client_for(&server);

    let err = client
        .list_users(&UserQuery::new(), &PageCursor::First, "stale")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            message: "Invalid token.".to_string()
        }
    );
}

#[tokio::test]
async fn test_receipts_default_year_and_flags() {
    use chrono::Datelike;

    let server = start().await;
    let client = client_for(&server);

    let query = ReceiptQuery::new().with_flag(ReceiptFlag::Sent, false);
    let page = client
        .list_receipts(&query, &PageCursor::First, "T")
        .await
        .unwrap();
    assert_eq!(page.items[0].r#type, "Sueldo");
    assert_eq!(page.items[0].period(), "3/2024");
    assert!(page.total_count.is_none());

    let recorded = server.requests();
    let year = chrono::Local::now().year().to_string();
    assert_eq!(param(&recorded[0].params, "year"), Some(year.as_str()));
    assert_eq!(param(&recorded[0].params, "isSended"), Some("false"));
    assert_eq!(param(&recorded[0].params, "sort"), Some("date_desc"));
}

#[tokio::test]
async fn test_flag_then_cleared_sends_two_distinct_queries() {
    let server = start().await;
    let client = client_for(&server);

    let mut query = ReceiptQuery::new().with_year(2024);
    query.set_flag(ReceiptFlag::Sent, Some(false));
    client
        .list_receipts(&query, &PageCursor::First, "T")
        .await
        .unwrap();
    query.set_flag(ReceiptFlag::Sent, None);
    client
        .list_receipts(&query, &PageCursor::First, "T")
        .await
        .unwrap();

    let recorded = server.requests();
    assert_eq!(recorded.len(), 2);
    assert_eq!(param(&recorded[0].params, "isSended"), Some("false"));
    assert_eq!(param(&recorded[1].params, "isSended"), None);
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = start().await;
    let client = client_for(&server);

    let err = client
        .list_receipts(&ReceiptQuery::new().with_search("broken"), &PageCursor::First, "T")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_server_error_without_message() {
    let server = start().await;
    let client = client_for(&server);

    let err = client
        .list_receipts(&ReceiptQuery::new().with_search("boom"), &PageCursor::First, "T")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: String::new()
        }
    );
}

#[tokio::test]
async fn test_receipt_file_link() {
    let server = start().await;
    let client = client_for(&server);

    let file = client.get_receipt_file("r-1", "T").await.unwrap();
    assert_eq!(file.file, "https://files.example.com/r-1.pdf");

    let err = client.get_receipt_file("missing", "T").await.unwrap_err();
    assert_eq!(err.status(), Some(404));

    let recorded = server.requests();
    assert_eq!(recorded[0].path, "/receipts/r-1/file");
    assert_eq!(recorded[0].authorization.as_deref(), Some("Token T"));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = start().await;
    let client =
        ApiClient::new(&ApiConfig::new(&server.base).with_timeout(Duration::from_millis(200)))
            .unwrap();

    let err = client
        .list_users(&UserQuery::new().with_search("slow"), &PageCursor::First, "T")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&ApiConfig::new(format!("http://{addr}"))).unwrap();
    let err = client.login("ana", "secret").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_page_source_dispatches_by_query_type() {
    let server = start().await;
    let client = client_for(&server);

    let users = client
        .fetch_page(&UserQuery::new(), &PageCursor::First, "T")
        .await
        .unwrap();
    let receipts = client
        .fetch_page(&ReceiptQuery::new(), &PageCursor::First, "T")
        .await
        .unwrap();

    assert_eq!(users.items[0].id, "1");
    assert_eq!(receipts.items[0].id, "r-1");
    let paths: Vec<_> = server.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/users/", "/receipts/"]);
}
