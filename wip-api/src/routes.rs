use axum::extract::{Query, Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use wip_core::{WipPage, WipQuery, WipView};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageResponse<T: Serialize> {
    #[serde(flatten)]
    body: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
}

impl<T: Serialize> PageResponse<T> {
    fn now(body: T) -> Self {
        Self {
            body,
            generated_at: OffsetDateTime::now_utc().format(&Rfc3339).ok(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/wip", get(get_wip))
        .route("/wip/view", get(get_wip_view))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn get_wip(
    State(state): State<AppState>,
    Query(query): Query<WipQuery>,
) -> Result<Json<PageResponse<WipPage>>, ApiError> {
    let page = state.source.fetch_page(&query)?;
    Ok(Json(PageResponse::now(page)))
}

async fn get_wip_view(
    State(state): State<AppState>,
    Query(query): Query<WipQuery>,
) -> Result<Json<PageResponse<WipView>>, ApiError> {
    let view = state.source.fetch_page(&query)?.into_view(&state.thresholds);
    Ok(Json(PageResponse::now(view)))
}

async fn require_token(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let Some(expected) = state.token.as_deref() else {
        return next.run(req).await;
    };
    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    if presented == Some(expected) {
        next.run(req).await
    } else {
        tracing::warn!(path = %req.uri().path(), "rejected request without valid token");
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "missing or invalid bearer token" })),
        )
            .into_response()
    }
}
