use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::models::users::entities::UserRole;
use crate::services::TeacherService;
use crate::utils::SafeId;

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

// HTTP处理程序
pub async fn list_teachers(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(&req).await
}

pub async fn create_teacher(
    req: HttpRequest,
    teacher_data: web::Json<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_teacher(teacher_data.into_inner(), &req)
        .await
}

pub async fn delete_teacher(req: HttpRequest, teacher_id: SafeId) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.delete_teacher(&teacher_id.0, &req).await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .service(
                        web::resource("")
                            .route(web::get().to(list_teachers))
                            .route(web::post().to(create_teacher)),
                    )
                    .route("/{id}", web::delete().to(delete_teacher)),
            ),
    );
}
