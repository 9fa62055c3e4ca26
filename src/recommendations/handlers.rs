use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::auth::repo::User;
use crate::courses::dto::CourseResponse;
use crate::courses::repo::Course;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// How many recent courses the picker draws from, and how many it returns.
const CANDIDATE_POOL: i64 = 10;
const MAX_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Serialize)]
pub struct RecommendationsData {
    pub user_id: Uuid,
    pub recommended_courses: Vec<CourseResponse>,
    pub count: usize,
}

/// Up to five recent courses the user did not create. When every candidate
/// is the user's own, fall back to the candidates themselves.
fn pick_recommendations(courses: Vec<Course>, user_id: Uuid) -> Vec<Course> {
    let (others, own): (Vec<_>, Vec<_>) =
        courses.into_iter().partition(|c| c.created_by != user_id);
    let mut picked = if others.is_empty() { own } else { others };
    picked.truncate(MAX_RECOMMENDATIONS);
    picked
}

#[instrument(skip(state))]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<RecommendationsData>>, ApiError> {
    if User::find_by_id(&state.db, user_id).await?.is_none() {
        return Err(ApiError::NotFound("User not found.".into()));
    }

    let candidates = Course::list_recent(&state.db, CANDIDATE_POOL).await?;
    let recommended: Vec<CourseResponse> = pick_recommendations(candidates, user_id)
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(ApiResponse::with_message(
        "Recommendations fetched successfully.",
        RecommendationsData {
            user_id,
            count: recommended.len(),
            recommended_courses: recommended,
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn course(created_by: Uuid, title: &str) -> Course {
        let now = OffsetDateTime::now_utc();
        Course {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            category: None,
            created_by,
            created_at: now,
            updated_at: now,
            creator_name: "Creator".into(),
            creator_email: "creator@example.com".into(),
        }
    }

    #[test]
    fn own_courses_are_excluded_when_others_exist() {
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();
        let picked = pick_recommendations(
            vec![course(me, "mine"), course(other, "theirs")],
            me,
        );
        assert_eq!(picked.len(), 1);
        assert!(picked.iter().all(|c| c.created_by != me));
    }

    #[test]
    fn at_most_five_are_returned() {
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();
        let candidates = (0..8).map(|i| course(other, &format!("c{i}"))).collect();
        assert_eq!(pick_recommendations(candidates, me).len(), 5);
    }

    #[test]
    fn falls_back_to_own_courses_when_nothing_else_exists() {
        let me = Uuid::new_v4();
        let picked = pick_recommendations(vec![course(me, "mine")], me);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].created_by, me);
    }

    #[test]
    fn empty_candidate_pool_yields_no_recommendations() {
        assert!(pick_recommendations(Vec::new(), Uuid::new_v4()).is_empty());
    }
}
