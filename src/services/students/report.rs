use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::responses::StudentReportResponse};
use crate::services::error_response;

// 成绩单按选课顺序列出，未评分的课程 grade 为 null
pub async fn get_report(
    service: &StudentService,
    student_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentReportResponse {
                student_id: student.id,
                name: student.name,
                rows: student.courses,
            },
            "Student report retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found!",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
