use serde::Serialize;

/// 留出集中的一个点
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeldOutPoint {
    pub index: usize,
    pub course: String,
    pub actual: f64,
}

/// 单个回归模型的预测结果
#[derive(Debug, Clone, Serialize)]
pub struct ModelPrediction {
    pub model: String,
    /// 与 held_out 一一对应
    pub predicted_grades: Vec<f64>,
    pub mean_absolute_error: f64,
    /// 下一门课程（序号 = 已评分课程数）的预测成绩，截断到 [0, 100]
    pub next_course_forecast: f64,
}

/// 成绩预测响应
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub student_id: String,
    pub data_points: usize,
    pub held_out: Vec<HeldOutPoint>,
    pub models: Vec<ModelPrediction>,
}
