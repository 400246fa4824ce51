use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn delete_student(
    service: &StudentService,
    student_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_student(student_id).await {
        Ok(true) => {
            info!("Student {} removed", student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
                "Student removed successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found!",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
