use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::api::ApiError;
use crate::models::{BookRequest, ErrorDetail, RecommendedBook};
use crate::services::RecommendationService;

#[utoipa::path(
    post,
    path = "/recommend_book",
    request_body = BookRequest,
    responses(
        (status = 200, description = "Up to five similar books", body = [RecommendedBook]),
        (status = 404, description = "Unknown title", body = ErrorDetail),
        (status = 422, description = "Unreadable request body", body = ErrorDetail)
    )
)]
pub async fn recommend_book(
    State(service): State<RecommendationService>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<Vec<RecommendedBook>>, ApiError> {
    let Json(request) =
        payload.map_err(|e| ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, e.body_text()))?;

    let books = service.recommend(&request.title).await?;
    Ok(Json(books))
}
