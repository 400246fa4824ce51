use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireJWT, RequireRole};
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::users::entities::UserRole;
use crate::services::CourseService;
use crate::utils::SafeCourseName;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn delete_course(req: HttpRequest, name: SafeCourseName) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&name.0, &req).await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_courses)
                            .wrap(RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_course)
                            .wrap(RequireRole::new(&UserRole::Admin)),
                    ),
            )
            .service(
                web::resource("/{name}")
                    .wrap(RequireRole::new(&UserRole::Admin))
                    .route(web::delete().to(delete_course)),
            ),
    );
}
