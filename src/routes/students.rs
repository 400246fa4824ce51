use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireJWT, RequireRole};
use crate::models::students::requests::{
    AssignCourseRequest, AssignGradeRequest, CreateStudentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{AnalyticsService, GradeService, StudentService};
use crate::utils::SafeId;

// 懒加载的全局服务实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);
static ANALYTICS_SERVICE: Lazy<AnalyticsService> = Lazy::new(AnalyticsService::new_lazy);

// HTTP处理程序
pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(student_data.into_inner(), &req)
        .await
}

pub async fn get_student(req: HttpRequest, student_id: SafeId) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&student_id.0, &req).await
}

pub async fn delete_student(req: HttpRequest, student_id: SafeId) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&student_id.0, &req).await
}

pub async fn get_report(req: HttpRequest, student_id: SafeId) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_report(&student_id.0, &req).await
}

pub async fn get_average(req: HttpRequest, student_id: SafeId) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_average(&student_id.0, &req).await
}

pub async fn assign_course(
    req: HttpRequest,
    student_id: SafeId,
    assign_data: web::Json<AssignCourseRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .assign_course(&student_id.0, assign_data.into_inner(), &req)
        .await
}

pub async fn assign_grade(
    req: HttpRequest,
    student_id: SafeId,
    grade_data: web::Json<AssignGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .assign_grade(&student_id.0, grade_data.into_inner(), &req)
        .await
}

pub async fn get_prediction(req: HttpRequest, student_id: SafeId) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.predict(&student_id.0, &req).await
}

pub async fn get_chart(req: HttpRequest, student_id: SafeId) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.chart(&student_id.0, &req).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_students)
                            .wrap(RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_student)
                            .wrap(RequireRole::new(&UserRole::Admin)),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .wrap(RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::get().to(get_student))
                    .route(web::delete().to(delete_student)),
            )
            .service(
                web::resource("/{id}/report")
                    .wrap(RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::get().to(get_report)),
            )
            .service(
                web::resource("/{id}/courses")
                    .wrap(RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::post().to(assign_course)),
            )
            .service(
                web::resource("/{id}/grades")
                    .wrap(RequireRole::new_any(UserRole::teacher_roles()))
                    .route(web::post().to(assign_grade)),
            )
            .service(
                web::resource("/{id}/average")
                    .wrap(RequireRole::new_any(UserRole::staff_roles()))
                    .route(web::get().to(get_average)),
            )
            .service(
                web::resource("/{id}/prediction")
                    .wrap(RequireRole::new_any(UserRole::staff_roles()))
                    .route(web::get().to(get_prediction)),
            )
            .service(
                web::resource("/{id}/chart")
                    .wrap(RequireRole::new_any(UserRole::staff_roles()))
                    .route(web::get().to(get_chart)),
            ),
    );
}
