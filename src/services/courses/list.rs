use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{ApiResponse, courses::responses::CourseListResponse};
use crate::services::error_response;

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_courses().await {
        Ok(items) => {
            let total = items.len();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CourseListResponse { items, total },
                "Courses retrieved successfully",
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
