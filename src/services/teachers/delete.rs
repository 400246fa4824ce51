use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn delete_teacher(
    service: &TeacherService,
    teacher_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_teacher(teacher_id).await {
        Ok(true) => {
            info!("Teacher {} removed", teacher_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
                "Teacher removed successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found!",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
