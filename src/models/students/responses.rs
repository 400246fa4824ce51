use serde::Serialize;

use super::entities::{CourseGrade, Student};

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student: Student,
}

#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<Student>,
    pub total: usize,
}

// 学生成绩单
#[derive(Debug, Serialize)]
pub struct StudentReportResponse {
    pub student_id: String,
    pub name: String,
    pub rows: Vec<CourseGrade>,
}

#[derive(Debug, Serialize)]
pub struct StudentAverageResponse {
    pub student_id: String,
    /// 保留两位小数
    pub average: f64,
    pub graded_courses: usize,
}

#[derive(Debug, Serialize)]
pub struct GradeAssignedResponse {
    pub student_id: String,
    pub course: String,
    pub grade: f64,
    pub graded_by: String,
}
