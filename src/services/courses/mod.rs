pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::requests::CreateCourseRequest;
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
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

    pub async fn create_course(
        &self,
        course_data: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, course_data, request).await
    }

    pub async fn delete_course(&self, name: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_course(self, name, request).await
    }

    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_courses(self, request).await
    }
}
