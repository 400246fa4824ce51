use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::AssignCourseRequest, responses::StudentResponse},
};
use crate::services::{bad_request, error_response};
use crate::utils::validate::validate_course_name;

pub async fn assign_course(
    service: &StudentService,
    student_id: &str,
    assign_data: AssignCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let course = assign_data.course.trim();
    if let Err(msg) = validate_course_name(course) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);
    match storage.assign_course_to_student(student_id, course).await {
        Ok(student) => {
            info!("Course '{}' assigned to student {}", course, student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StudentResponse { student },
                format!("Course '{course}' assigned to student {student_id}"),
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
