pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teachers::requests::CreateTeacherRequest;
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
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

    // 添加教师
    pub async fn create_teacher(
        &self,
        teacher_data: CreateTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_teacher(self, teacher_data, request).await
    }

    // 删除教师
    pub async fn delete_teacher(
        &self,
        teacher_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_teacher(self, teacher_id, request).await
    }

    // 查看全部教师
    pub async fn list_teachers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_teachers(self, request).await
    }
}
