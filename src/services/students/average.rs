use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::errors::SGSError;
use crate::models::{ApiResponse, ErrorCode, students::responses::StudentAverageResponse};
use crate::services::error_response;

pub async fn get_average(
    service: &StudentService,
    student_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found!",
            )));
        }
        Err(e) => return Ok(error_response(&e)),
    };

    match student.average_grade() {
        Some(average) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentAverageResponse {
                student_id: student.id.clone(),
                average: (average * 100.0).round() / 100.0,
                graded_courses: student.graded_courses().count(),
            },
            format!("Average grade for student {}: {:.2}", student.id, average),
        ))),
        None => Ok(error_response(&SGSError::grades_unavailable(
            "No grades available for this student",
        ))),
    }
}
