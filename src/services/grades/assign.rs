use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeService;
use crate::errors::SGSError;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::AssignGradeRequest, responses::GradeAssignedResponse},
};
use crate::services::{bad_request, error_response_with_code};
use crate::utils::validate::validate_course_name;

fn grade_error_code(err: &SGSError) -> ErrorCode {
    match err {
        SGSError::Validation(_) => ErrorCode::GradeInvalid,
        SGSError::Authorization(_) => ErrorCode::GradePermissionDenied,
        _ => ErrorCode::from(err),
    }
}

pub async fn assign_grade(
    service: &GradeService,
    student_id: &str,
    grade_data: AssignGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 登记人始终是当前登录的教师
    let Some(teacher_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let course = grade_data.course.trim();
    if let Err(msg) = validate_course_name(course) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);
    match storage
        .assign_grade(&teacher_id, student_id, course, &grade_data.grade)
        .await
    {
        Ok(student) => {
            let grade = student.grade_for(course).unwrap_or_default();
            info!(
                "Teacher {} graded student {} in '{}': {}",
                teacher_id, student_id, course, grade
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                GradeAssignedResponse {
                    student_id: student_id.to_string(),
                    course: course.to_string(),
                    grade,
                    graded_by: teacher_id,
                },
                "Grade assigned successfully",
            )))
        }
        Err(e) => Ok(error_response_with_code(&e, grade_error_code(&e))),
    }
}
