use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn delete_course(
    service: &CourseService,
    name: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_course(name).await {
        Ok(true) => {
            info!("Course '{}' removed from the catalog", name);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
                "Course removed successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Invalid course name!",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
