use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
}
