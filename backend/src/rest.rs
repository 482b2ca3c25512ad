use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use shared::{Ledger, RegisterRequest, SavingsPayload, VerifyRequest, VerifyResponse};
use tracing::info;

use crate::db::DbConnection;
use crate::reference;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: DbConnection,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/savings/:user_id", get(get_savings).post(put_savings))
        .route("/register", post(register))
        .route("/verify", post(verify))
        .route("/banks", get(list_banks))
        .route("/investments", get(list_investments));

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Axum handler for GET /api/savings/:user_id
///
/// Users that never saved get `{"savings": {}}` with 200, so the client
/// never has to special-case a blank slate.
async fn get_savings(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/savings/{}", user_id);

    match state.db.get_ledger(&user_id).await {
        Ok(Some(document)) => match serde_json::from_str::<Ledger>(&document) {
            Ok(savings) => (StatusCode::OK, Json(SavingsPayload { savings })).into_response(),
            Err(e) => {
                tracing::error!("Stored ledger for {} is malformed: {:?}", user_id, e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error reading savings").into_response()
            }
        },
        Ok(None) => {
            (StatusCode::OK, Json(SavingsPayload { savings: Ledger::default() })).into_response()
        }
        Err(e) => {
            tracing::error!("Error loading savings for {}: {:?}", user_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error reading savings").into_response()
        }
    }
}

/// Axum handler for POST /api/savings/:user_id
///
/// Complete overwrite of the stored ledger; last write wins.
async fn put_savings(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<SavingsPayload>,
) -> impl IntoResponse {
    info!(
        "POST /api/savings/{} - {} month(s)",
        user_id,
        payload.savings.months.len()
    );

    let document = match serde_json::to_string(&payload.savings) {
        Ok(document) => document,
        Err(e) => {
            tracing::error!("Could not serialize ledger for {}: {:?}", user_id, e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error storing savings").into_response();
        }
    };

    match state.db.put_ledger(&user_id, &document).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => {
            tracing::error!("Error storing savings for {}: {:?}", user_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error storing savings").into_response()
        }
    }
}

/// Axum handler for POST /api/register
async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> impl IntoResponse {
    info!("POST /api/register - id: {}", request.unique_id);

    match state.db.register_user(&request.unique_id, &request.full_name).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => {
            tracing::error!("Error registering {}: {:?}", request.unique_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error registering user").into_response()
        }
    }
}

/// Axum handler for POST /api/verify
///
/// Always answers 200 with a success flag; the message is shown to the
/// user verbatim. This is the sign-in stub, not real authentication.
async fn verify(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> impl IntoResponse {
    info!("POST /api/verify - id: {}", request.unique_id);

    match state.db.get_user_name(&request.unique_id).await {
        Ok(Some(name)) if name == request.full_name => {
            let response = VerifyResponse {
                success: true,
                message: format!("Welcome back, {}!", name),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(Some(_)) => {
            let response = VerifyResponse {
                success: false,
                message: "This name does not match our records for that ID.".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => {
            let response = VerifyResponse {
                success: false,
                message: "No account found for this ID.".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Error verifying {}: {:?}", request.unique_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error verifying user").into_response()
        }
    }
}

/// Axum handler for GET /api/banks
async fn list_banks() -> impl IntoResponse {
    Json(reference::banks())
}

/// Axum handler for GET /api/investments
async fn list_investments() -> impl IntoResponse {
    Json(reference::investments())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use shared::MonthKey;
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        router(AppState::new(db))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        serde_json::from_slice(&bytes).expect("Body is not JSON")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json<T: serde::Serialize>(uri: &str, body: &T) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::default();
        ledger
            .months
            .entry(MonthKey::new(2025, 2).unwrap())
            .or_default()
            .insert(10, 800.0);
        ledger
    }

    #[tokio::test]
    async fn test_unknown_user_gets_empty_savings() {
        let app = test_app().await;

        let response = app.oneshot(get_request("/api/savings/SS-999999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "savings": {} }));
    }

    #[tokio::test]
    async fn test_savings_round_trip() {
        let app = test_app().await;
        let payload = SavingsPayload { savings: sample_ledger() };

        let response = app
            .clone()
            .oneshot(post_json("/api/savings/SS-123456", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.oneshot(get_request("/api/savings/SS-123456")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stored: SavingsPayload = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(stored, payload);
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let app = test_app().await;

        let first = SavingsPayload { savings: sample_ledger() };
        app.clone()
            .oneshot(post_json("/api/savings/SS-123456", &first))
            .await
            .unwrap();

        let mut replacement = Ledger::default();
        replacement
            .months
            .entry(MonthKey::new(2025, 3).unwrap())
            .or_default()
            .insert(1, 50.0);
        let second = SavingsPayload { savings: replacement };
        app.clone()
            .oneshot(post_json("/api/savings/SS-123456", &second))
            .await
            .unwrap();

        let response = app.oneshot(get_request("/api/savings/SS-123456")).await.unwrap();
        let stored: SavingsPayload = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(stored, second);
    }

    #[tokio::test]
    async fn test_verify_unknown_id_is_rejected() {
        let app = test_app().await;

        let request = VerifyRequest {
            unique_id: "SS-999999".to_string(),
            full_name: "Ayesha Khan".to_string(),
        };
        let response = app.oneshot(post_json("/api/verify", &request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: VerifyResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert!(!body.success);
        assert!(body.message.contains("No account"));
    }

    #[tokio::test]
    async fn test_register_then_verify() {
        let app = test_app().await;

        let request = RegisterRequest {
            unique_id: "SS-123456".to_string(),
            full_name: "Ayesha Khan".to_string(),
        };
        let response = app.clone().oneshot(post_json("/api/register", &request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // Matching name succeeds
        let request = VerifyRequest {
            unique_id: "SS-123456".to_string(),
            full_name: "Ayesha Khan".to_string(),
        };
        let response = app.clone().oneshot(post_json("/api/verify", &request)).await.unwrap();
        let body: VerifyResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert!(body.success);

        // Wrong name is rejected
        let request = VerifyRequest {
            unique_id: "SS-123456".to_string(),
            full_name: "Someone Else".to_string(),
        };
        let response = app.oneshot(post_json("/api/verify", &request)).await.unwrap();
        let body: VerifyResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert!(!body.success);
        assert!(body.message.contains("does not match"));
    }

    #[tokio::test]
    async fn test_bank_table_endpoint() {
        let app = test_app().await;

        let response = app.oneshot(get_request("/api/banks")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let banks = body.as_array().expect("banks is not an array");
        assert!(!banks.is_empty());
        assert!(banks[0]["type"].is_string());
    }

    #[tokio::test]
    async fn test_investment_table_endpoint() {
        let app = test_app().await;

        let response = app.oneshot(get_request("/api/investments")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let investments = body.as_array().expect("investments is not an array");
        assert!(!investments.is_empty());
        assert!(investments[0]["return"].is_string());
    }
}
