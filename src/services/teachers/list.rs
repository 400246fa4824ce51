use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, teachers::responses::TeacherListResponse};
use crate::services::error_response;

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_teachers().await {
        Ok(items) => {
            let total = items.len();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                TeacherListResponse { items, total },
                "Teachers retrieved successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
