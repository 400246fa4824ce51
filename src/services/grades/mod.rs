pub mod assign;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::AssignGradeRequest;
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
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

    // 教师为学生登记成绩
    pub async fn assign_grade(
        &self,
        student_id: &str,
        grade_data: AssignGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_grade(self, student_id, grade_data, request).await
    }
}
