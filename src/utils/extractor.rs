use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_course_name, validate_record_id};

fn bad_path(message: &str) -> actix_web::Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

// 路由只保留 `%2F` 等保留字符的编码，整段反序列化才会完全解码
fn decoded_match_segment(req: &HttpRequest) -> Option<String> {
    req.match_info().load::<String>().ok()
}

/// 经过校验的学生/教师 ID 路径参数
#[derive(Debug, Clone)]
pub struct SafeId(pub String);

impl FromRequest for SafeId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match decoded_match_segment(req) {
            Some(id) => validate_record_id(&id)
                .map(|_| SafeId(id))
                .map_err(bad_path),
            None => Err(bad_path("Missing ID in path")),
        };
        ready(result)
    }
}

/// 经过校验的课程名路径参数（已做 URL 解码）
#[derive(Debug, Clone)]
pub struct SafeCourseName(pub String);

impl FromRequest for SafeCourseName {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match decoded_match_segment(req) {
            Some(name) => validate_course_name(&name)
                .map(|_| SafeCourseName(name.trim().to_string()))
                .map_err(bad_path),
            None => Err(bad_path("Missing course name in path")),
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};

    async fn echo_id(id: SafeId) -> HttpResponse {
        HttpResponse::Ok().body(id.0)
    }

    async fn echo_course(name: SafeCourseName) -> HttpResponse {
        HttpResponse::Ok().body(name.0)
    }

    #[actix_web::test]
    async fn test_safe_id_accepts_and_rejects() {
        let app = test::init_service(
            App::new()
                .route("/students/{id}", web::get().to(echo_id))
                .route("/courses/{name}", web::get().to(echo_course)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/students/101").to_request()).await;
        assert!(resp.status().is_success());
        assert_eq!(test::read_body(resp).await, "101");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/students/a%20b").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/courses/Machine%20Learning")
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());
        assert_eq!(test::read_body(resp).await, "Machine Learning");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/courses/CI%2FCD").to_request(),
        )
        .await;
        assert!(resp.status().is_success());
        assert_eq!(test::read_body(resp).await, "CI/CD");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/courses/C%2B%2B%20100%25").to_request(),
        )
        .await;
        assert!(resp.status().is_success());
        assert_eq!(test::read_body(resp).await, "C++ 100%");
    }
}
