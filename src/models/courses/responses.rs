use serde::Serialize;

use super::entities::Course;

#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub total: usize,
}
