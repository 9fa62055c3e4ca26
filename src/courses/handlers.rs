use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::middleware::CurrentUser;
use crate::courses::dto::{
    CourseData, CourseListData, CourseResponse, CreateCourseRequest, UpdateCourseRequest,
};
use crate::courses::repo::Course;
use crate::error::ApiError;
use crate::logs::recorder;
use crate::response::ApiResponse;
use crate::state::AppState;

#[instrument(skip(state, user, payload))]
pub async fn create_course(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CourseData>>), ApiError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(ApiError::Validation("Title is required.".into()));
    }

    let course = Course::create(
        &state.db,
        title,
        payload.description.as_deref(),
        payload.category.as_deref(),
        user.id,
    )
    .await?;

    recorder::record(&state, Some(user.id), "course_created", "success");

    info!(course_id = %course.id, user_id = %user.id, "course created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Course created successfully.",
            CourseData {
                course: course.into(),
            },
        )),
    ))
}

#[instrument(skip(state))]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CourseListData>>, ApiError> {
    let courses: Vec<CourseResponse> = Course::list(&state.db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(ApiResponse::data(CourseListData {
        count: courses.len(),
        courses,
    })))
}

#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CourseData>>, ApiError> {
    let course = Course::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found.".into()))?;

    Ok(Json(ApiResponse::data(CourseData {
        course: course.into(),
    })))
}

#[instrument(skip(state, user, payload))]
pub async fn update_course(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCourseRequest>,
) -> Result<Json<ApiResponse<CourseData>>, ApiError> {
    if let Some(title) = payload.title.as_deref() {
        if title.trim().is_empty() {
            return Err(ApiError::Validation("Title cannot be empty.".into()));
        }
    }

    let existing = Course::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found.".into()))?;

    if existing.created_by != user.id {
        return Err(ApiError::Forbidden(
            "You can only update your own courses.".into(),
        ));
    }

    let course = Course::update(
        &state.db,
        id,
        payload.title.as_deref().map(str::trim),
        payload.description.as_deref(),
        payload.category.as_deref(),
    )
    .await?;

    recorder::record(&state, Some(user.id), "course_updated", "success");

    info!(course_id = %course.id, user_id = %user.id, "course updated");
    Ok(Json(ApiResponse::with_message(
        "Course updated successfully.",
        CourseData {
            course: course.into(),
        },
    )))
}

#[instrument(skip(state, user))]
pub async fn delete_course(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let existing = Course::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found.".into()))?;

    if existing.created_by != user.id {
        return Err(ApiError::Forbidden(
            "You can only delete your own courses.".into(),
        ));
    }

    Course::delete(&state.db, id).await?;

    recorder::record(&state, Some(user.id), "course_deleted", "success");

    info!(course_id = %id, user_id = %user.id, "course deleted");
    Ok(Json(ApiResponse::message_only("Course deleted successfully.")))
}
