use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{post, put},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use dorev::{Dictionary, DorevError, TokenKind, resolve, tokenize};
use dorev_sync::{DictionaryStore, HookResult, HttpSource, MessageHook, Settings, SyncError};

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub message: String,
    /// Include a per-token breakdown in the response
    #[serde(default)]
    pub explain: bool,
}

#[derive(Serialize, Deserialize)]
pub struct TokenReport {
    pub origin: String,
    pub kind: TokenKind,
    pub text: String,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translated: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenReport>>,
}

#[derive(Serialize, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

#[derive(Serialize)]
pub struct DictionaryResponse {
    pub url: String,
    pub words: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub hook: Arc<RwLock<MessageHook>>,
}

impl AppState {
    pub fn new(hook: MessageHook) -> Self {
        Self {
            hook: Arc::new(RwLock::new(hook)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let settings = Settings::from_env()
        .map_err(|e| format!("Failed to read settings: {}", e))?;
    let source = HttpSource::new().map_err(|e| format!("Failed to initialize HTTP client: {}", e))?;
    let state = AppState::new(MessageHook::new(DictionaryStore::new(settings, Box::new(source))));

    let bind = std::env::var("DOREV_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    info!("Starting dorev web server");
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("Server running at http://{}", bind);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/translate", post(translate_message))
        .route("/api/dictionary/refresh", post(refresh_dictionary))
        .route("/api/dictionary/url", put(change_dictionary_url))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_error(err: SyncError) -> ApiError {
    let status = match &err {
        SyncError::Config(_) | SyncError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        SyncError::Network(_)
        | SyncError::HttpStatus { .. }
        | SyncError::EmptyDictionary(_)
        | SyncError::Dictionary(_) => StatusCode::BAD_GATEWAY,
        SyncError::Cache(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!(%status, error = %err, "request failed");
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn explain(message: &str, dictionary: &Dictionary) -> Vec<TokenReport> {
    let tokens = tokenize(message);
    resolve(&tokens, dictionary)
        .into_iter()
        .map(|item| TokenReport {
            origin: item.token.origin().to_string(),
            kind: item.token.kind(),
            text: item.text,
        })
        .collect()
}

fn respond(hook: &MessageHook, request: TranslateRequest) -> Result<TranslateResponse, ApiError> {
    let outcome = hook
        .try_on_send_message(&request.message)
        .unwrap_or(Err(SyncError::Dictionary(DorevError::MissingDictionary)))
        .map_err(api_error)?;

    let translated = match outcome {
        HookResult::Modify(text) => text,
        HookResult::Default => request.message.clone(),
    };
    let tokens = match (request.explain, hook.store().dictionary()) {
        (true, Some(dictionary)) => Some(explain(&request.message, dictionary)),
        _ => None,
    };

    Ok(TranslateResponse {
        translated,
        source: request.message,
        tokens,
    })
}

async fn translate_message(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    info!("Translating message '{}'", &request.message);

    {
        let hook = state.hook.read().await;
        if !hook.needs_dictionary() {
            return respond(&hook, request).map(Json);
        }
    }

    // translate under the guard that loaded the dictionary
    let mut hook = state.hook.write().await;
    hook.store_mut().ensure_loaded().await.map_err(api_error)?;
    respond(&hook, request).map(Json)
}

async fn refresh_dictionary(
    State(state): State<AppState>,
) -> Result<Json<DictionaryResponse>, ApiError> {
    let mut hook = state.hook.write().await;
    let words = hook.store_mut().refresh().await.map_err(api_error)?.len();
    let url = hook.store().settings().dictionary_url.clone();

    info!("Dictionary refreshed from {} ({} words)", url, words);
    Ok(Json(DictionaryResponse { url, words }))
}

async fn change_dictionary_url(
    State(state): State<AppState>,
    Json(request): Json<UrlRequest>,
) -> Result<Json<DictionaryResponse>, ApiError> {
    let mut hook = state.hook.write().await;
    let words = hook
        .store_mut()
        .change_url(&request.url)
        .await
        .map_err(api_error)?
        .len();
    let url = hook.store().settings().dictionary_url.clone();

    info!("Dictionary switched to {} ({} words)", url, words);
    Ok(Json(DictionaryResponse { url, words }))
}
