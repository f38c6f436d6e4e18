use std::net::SocketAddr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::{routing::get, routing::post, Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::recommend::{
    recommend, ErrorResponse, RecommendContext, RecommendRequest, RecommendResponse,
};

const INDEX_HTML: &str = include_str!("../static/index.html");

const EMPTY_INPUT_ERROR: &str = "请输入您的身体状况或需求";
const RECOMMEND_FAILED_ERROR: &str = "获取药膳推荐失败";

pub fn app(ctx: RecommendContext) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/v1/health", get(health))
        .route("/recommend", post(recommend_handler))
        .with_state(ctx)
}

async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "name": "yaoshan_web", "version": env!("CARGO_PKG_VERSION")}))
}

async fn recommend_handler(
    State(ctx): State<RecommendContext>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, (StatusCode, Json<ErrorResponse>)> {
    if req.input.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: EMPTY_INPUT_ERROR.to_string(),
            }),
        ));
    }

    match recommend(&ctx, &req.input).await {
        Ok(recipes) => Ok(Json(RecommendResponse { recipes })),
        Err(e) => {
            // Full detail stays server-side; the body carries only the
            // generic message, never status codes or credentials.
            tracing::error!(error = %e, "recommendation call failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: RECOMMEND_FAILED_ERROR.to_string(),
                }),
            ))
        }
    }
}

pub async fn serve(addr: SocketAddr, ctx: RecommendContext) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app(ctx)).await
}

pub async fn spawn_test_server(ctx: RecommendContext) -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app(ctx)).await;
    });
    (addr, handle)
}
