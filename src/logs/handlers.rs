use axum::extract::{Query, State};
use axum::Json;
use tracing::instrument;

use crate::error::ApiError;
use crate::logs::dto::{total_pages, LogsData, LogsQuery, PaginationMeta};
use crate::logs::repo;
use crate::response::ApiResponse;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_logs(
    State(state): State<AppState>,
    Query(q): Query<LogsQuery>,
) -> Result<Json<ApiResponse<LogsData>>, ApiError> {
    let page = q.page.max(1);
    let limit = q.limit.clamp(1, 100);
    let offset = (page - 1) * limit;

    let total = repo::count_all(&state.db).await?;
    let entries = repo::list_page(&state.db, limit, offset).await?;

    Ok(Json(ApiResponse::data(LogsData {
        logs: entries.into_iter().map(Into::into).collect(),
        pagination: PaginationMeta {
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        },
    })))
}
