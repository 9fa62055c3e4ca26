use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::courses::repo::Course;

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatorInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_by: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub creator: CreatorInfo,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            category: course.category,
            created_by: course.created_by,
            created_at: course.created_at,
            updated_at: course.updated_at,
            creator: CreatorInfo {
                id: course.created_by,
                name: course.creator_name,
                email: course.creator_email,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CourseData {
    pub course: CourseResponse,
}

#[derive(Debug, Serialize)]
pub struct CourseListData {
    pub count: usize,
    pub courses: Vec<CourseResponse>,
}
