use serde::Serialize;

use super::entities::Teacher;

#[derive(Debug, Serialize)]
pub struct TeacherResponse {
    pub teacher: Teacher,
}

#[derive(Debug, Serialize)]
pub struct TeacherListResponse {
    pub items: Vec<Teacher>,
    pub total: usize,
}
