use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{requests::CreateTeacherRequest, responses::TeacherResponse},
};
use crate::services::{bad_request, error_response};
use crate::utils::password::hash_password;
use crate::utils::validate::{
    validate_course_name, validate_name, validate_password, validate_record_id,
};

pub async fn create_teacher(
    service: &TeacherService,
    teacher_data: CreateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let id = teacher_data.id.trim();
    let course = teacher_data.course.trim();

    if let Err(msg) = validate_record_id(id) {
        return Ok(bad_request(ErrorCode::TeacherInvalid, msg));
    }
    if let Err(msg) = validate_name(&teacher_data.name) {
        return Ok(bad_request(ErrorCode::TeacherInvalid, msg));
    }
    if let Err(msg) = validate_password(&teacher_data.password) {
        return Ok(bad_request(ErrorCode::TeacherPasswordInvalid, msg));
    }
    if let Err(msg) = validate_course_name(course) {
        return Ok(bad_request(ErrorCode::TeacherInvalid, msg));
    }

    let password_hash = match hash_password(&teacher_data.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(error_response(&e)),
    };

    let storage = service.get_storage(request);
    match storage
        .create_teacher(id, teacher_data.name.trim(), password_hash, course)
        .await
    {
        Ok(teacher) => {
            info!("Teacher {} added with course '{}'", teacher.id, course);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                TeacherResponse { teacher },
                "Teacher added successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
