use serde::Deserialize;

use crate::models::common::NumberInput;

// 添加学生请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub id: String,
    pub name: String,
    pub age: NumberInput,
}

// 为学生分配课程
#[derive(Debug, Deserialize)]
pub struct AssignCourseRequest {
    pub course: String,
}

// 教师登记成绩
#[derive(Debug, Deserialize)]
pub struct AssignGradeRequest {
    pub course: String,
    pub grade: NumberInput,
}
