pub mod average;
pub mod create;
pub mod delete;
pub mod enroll;
pub mod get;
pub mod list;
pub mod report;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{AssignCourseRequest, CreateStudentRequest};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 添加学生
    pub async fn create_student(
        &self,
        student_data: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, student_data, request).await
    }

    // 删除学生
    pub async fn delete_student(
        &self,
        student_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, student_id, request).await
    }

    // 查看全部学生
    pub async fn list_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_students(self, request).await
    }

    // 按 ID 查找学生
    pub async fn get_student(
        &self,
        student_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, student_id, request).await
    }

    // 学生成绩单
    pub async fn get_report(
        &self,
        student_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        report::get_report(self, student_id, request).await
    }

    // 为学生分配课程
    pub async fn assign_course(
        &self,
        student_id: &str,
        assign_data: AssignCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::assign_course(self, student_id, assign_data, request).await
    }

    // 平均成绩
    pub async fn get_average(
        &self,
        student_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        average::get_average(self, student_id, request).await
    }
}
