use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnalyticsService;
use crate::analytics::predict_performance;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn predict_student_performance(
    service: &AnalyticsService,
    student_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found!",
            )));
        }
        Err(e) => return Ok(error_response(&e)),
    };

    match predict_performance(&student, &service.get_config().prediction) {
        Ok(prediction) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            prediction,
            "Prediction completed",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}
