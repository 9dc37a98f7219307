//! Page endpoints.

use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::errors::AppError;
use crate::pages::{assemble, PageMode};
use crate::AppState;

/// Response type for page handlers. Errors render as plain text.
pub type PageResult = Result<Html<String>, AppError>;

async fn render(state: &AppState, mode: PageMode, id: &str) -> PageResult {
    assemble(state, mode, id).await.map(Html)
}

/// GET / and GET /us - Full page for the default system.
pub async fn home(State(state): State<AppState>) -> PageResult {
    render(&state, PageMode::Full, &state.config.default_system).await
}

/// GET /sys/{system} - Full page for any system.
pub async fn system_page(
    State(state): State<AppState>,
    Path(system): Path<String>,
) -> PageResult {
    render(&state, PageMode::Full, &system).await
}

/// GET /simple/{system} - Summary card for a five-letter system id.
pub async fn simple_page(
    State(state): State<AppState>,
    Path(system): Path<String>,
) -> PageResult {
    render(&state, PageMode::Simple, &system).await
}

/// GET /sys/ - Full page route with the id left out.
pub async fn system_page_without_id(State(state): State<AppState>) -> PageResult {
    render(&state, PageMode::Full, "").await
}

/// GET /simple/ - Simple page route with the id left out.
pub async fn simple_page_without_id(State(state): State<AppState>) -> PageResult {
    render(&state, PageMode::Simple, "").await
}
