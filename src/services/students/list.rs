use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, students::responses::StudentListResponse};
use crate::services::error_response;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students().await {
        Ok(items) => {
            let total = items.len();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StudentListResponse { items, total },
                "Students retrieved successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
