use super::types::{
    ChartQuery, ChatRequest, ChatResponse, ErrorResponse, StockQuery, StockRow, SuggestionsResponse,
    stock_rows,
};
use crate::{
    Error,
    chart::{CHART_HEIGHT, ChartRenderer, SvgSurface},
    chat::{ChatSession, Message},
    market::{self, PricePoint},
};
use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info, warn};

const DEFAULT_CHART_WIDTH: f64 = 600.0;
const MIN_CHART_WIDTH: f64 = 100.0;
const MAX_CHART_WIDTH: f64 = 4000.0;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<ChatSession>,
    pub renderer: Arc<ChartRenderer>,
    pub history: Arc<Vec<PricePoint>>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, error: impl Into<String>) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, HandlerError> {
    info!("Received chat input ({} chars)", request.input.len());

    // The turn runs detached so a dropped connection cannot cut it short.
    let session = Arc::clone(&state.session);
    let turn = tokio::spawn(async move { session.submit(&request.input).await });
    let outcome = turn
        .await
        .map_err(|e| Error::internal(format!("Chat turn task failed: {e}")));

    match outcome.and_then(|result| result) {
        Ok(Some(message)) => Ok(Json(ChatResponse { message }).into_response()),
        Ok(None) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(Error::RequestInFlight) => {
            warn!("Rejected chat input while a request is in flight");
            Err(error_response(
                StatusCode::CONFLICT,
                Error::RequestInFlight.to_string(),
            ))
        }
        Err(e) => {
            error!("Failed to process chat input: {}", e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Processing error: {}", e),
            ))
        }
    }
}

pub async fn transcript(State(state): State<AppState>) -> Result<Json<Vec<Message>>, HandlerError> {
    state
        .session
        .transcript()
        .map(Json)
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

pub async fn suggestions(
    State(state): State<AppState>,
) -> Result<Json<SuggestionsResponse>, HandlerError> {
    state
        .session
        .suggestions()
        .map(|suggestions| Json(SuggestionsResponse { suggestions }))
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

pub async fn stocks(Query(query): Query<StockQuery>) -> Json<Vec<StockRow>> {
    Json(stock_rows(market::search(
        query.q.as_deref().unwrap_or_default(),
    )))
}

pub async fn watchlist() -> Json<Vec<StockRow>> {
    Json(stock_rows(market::mock_watchlist()))
}

pub async fn chart_svg(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Response, HandlerError> {
    let width = query
        .width
        .filter(|w| w.is_finite())
        .unwrap_or(DEFAULT_CHART_WIDTH)
        .clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH);

    let mut surface = SvgSurface::new(width, CHART_HEIGHT);
    match state.renderer.render(&mut surface, &state.history) {
        Ok(()) => Ok(([(header::CONTENT_TYPE, "image/svg+xml")], surface.to_svg()).into_response()),
        Err(e) => Err(error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())),
    }
}
