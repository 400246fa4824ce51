use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnalyticsService;
use crate::analytics::chart;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

// 成功时直接返回 SVG 图片，失败时仍返回 JSON 错误信封
pub async fn plot_student_performance(
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

    match chart::plot_student_performance(&student) {
        Ok(svg) => Ok(HttpResponse::Ok()
            .content_type("image/svg+xml; charset=utf-8")
            .body(svg)),
        Err(e) => Ok(error_response(&e)),
    }
}
