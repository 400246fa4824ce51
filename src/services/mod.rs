pub mod analytics;
pub mod auth;
pub mod courses;
pub mod grades;
pub mod students;
pub mod teachers;

use actix_web::{HttpResponse, http::StatusCode};
use tracing::{error, info};

use crate::errors::SGSError;
use crate::models::{ApiResponse, ErrorCode};

pub use analytics::AnalyticsService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use grades::GradeService;
pub use students::StudentService;
pub use teachers::TeacherService;

/// 业务错误对应的 HTTP 状态码
pub(crate) fn status_for(err: &SGSError) -> StatusCode {
    match err {
        SGSError::Validation(_) => StatusCode::BAD_REQUEST,
        SGSError::Authentication(_) => StatusCode::UNAUTHORIZED,
        SGSError::Authorization(_) => StatusCode::FORBIDDEN,
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        SGSError::StudentAlreadyExists(_)
        | SGSError::TeacherAlreadyExists(_)
        | SGSError::CourseAlreadyExists(_)
        | SGSError::CourseAlreadyAssigned(_)
        | SGSError::CourseAlreadyEnrolled(_)
        | SGSError::CourseInUse(_) => StatusCode::CONFLICT,
        SGSError::CourseNotEnrolled(_)
        | SGSError::GradesUnavailable(_)
        | SGSError::InsufficientData(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 将业务错误转换为统一的错误响应
pub(crate) fn error_response(err: &SGSError) -> HttpResponse {
    error_response_with_code(err, ErrorCode::from(err))
}

/// 同上，但使用调用方指定的错误码
pub(crate) fn error_response_with_code(err: &SGSError, code: ErrorCode) -> HttpResponse {
    let status = status_for(err);
    if status.is_server_error() {
        error!("{}", err.format_simple());
    } else {
        info!("Request rejected: {}", err.format_simple());
    }
    HttpResponse::build(status).json(ApiResponse::error_empty(code, err.message()))
}

/// 参数校验失败的响应
pub(crate) fn bad_request(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&SGSError::student_not_found("x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&SGSError::course_already_assigned("x")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&SGSError::authorization("x")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_for(&SGSError::grades_unavailable("x")),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(&SGSError::password_hash("x")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
