use serde::Deserialize;

// 添加教师请求，同时为其分配一门课程
#[derive(Debug, Deserialize)]
pub struct CreateTeacherRequest {
    pub id: String,
    pub name: String,
    pub password: String,
    pub course: String,
}
