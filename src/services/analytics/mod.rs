pub mod chart;
pub mod prediction;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::Storage;

pub struct AnalyticsService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnalyticsService {
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

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 成绩走势预测
    pub async fn predict(&self, student_id: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        prediction::predict_student_performance(self, student_id, request).await
    }

    // 成绩柱状图
    pub async fn chart(&self, student_id: &str, request: &HttpRequest) -> ActixResult<HttpResponse> {
        chart::plot_student_performance(self, student_id, request).await
    }
}
