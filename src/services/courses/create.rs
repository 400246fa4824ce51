use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode, courses::requests::CreateCourseRequest};
use crate::services::{bad_request, error_response};
use crate::utils::validate::validate_course_name;

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let name = course_data.name.trim();
    if let Err(msg) = validate_course_name(name) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let storage = service.get_storage(request);
    match storage.create_course(name).await {
        Ok(course) => {
            info!("Course '{}' added to the catalog", course.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(course, "Course added successfully")))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
