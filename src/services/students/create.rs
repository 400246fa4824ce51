use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::errors::SGSError;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::CreateStudentRequest, responses::StudentResponse},
};
use crate::services::{bad_request, error_response_with_code};
use crate::utils::validate::{validate_name, validate_record_id};

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let id = student_data.id.trim();
    if let Err(msg) = validate_record_id(id) {
        return Ok(bad_request(ErrorCode::StudentInvalid, msg));
    }
    if let Err(msg) = validate_name(&student_data.name) {
        return Ok(bad_request(ErrorCode::StudentInvalid, msg));
    }

    let storage = service.get_storage(request);
    match storage
        .create_student(id, student_data.name.trim(), &student_data.age)
        .await
    {
        Ok(student) => {
            info!("Student {} added", student.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StudentResponse { student },
                "Student added successfully",
            )))
        }
        Err(e) => {
            let code = match e {
                SGSError::Validation(_) => ErrorCode::StudentInvalid,
                _ => ErrorCode::from(&e),
            };
            Ok(error_response_with_code(&e, code))
        }
    }
}
