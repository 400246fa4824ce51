//! 成绩分析：回归预测与柱状图
//!
//! 学生已评分课程按选课顺序构成序列 `x = 序号, y = 成绩`。

pub mod chart;
pub mod regression;

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::debug;

use crate::config::PredictionConfig;
use crate::errors::{Result, SGSError};
use crate::models::analytics::responses::{HeldOutPoint, ModelPrediction, PredictionResponse};
use crate::models::students::entities::Student;
use regression::{
    DecisionTreeRegressor, LinearRegression, PolynomialRegression, RandomForestRegressor,
    Regressor,
};

/// 预测所需的最少已评分课程数
pub const MIN_PREDICTION_POINTS: usize = 2;

/// 按比例随机划分训练集与留出集，返回 (训练下标, 留出下标)
///
/// 留出集大小向上取整，且训练集与留出集都至少保留一个样本。
pub fn train_test_split(n: usize, test_size: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let n_test = ((test_size * n as f64).ceil() as usize).clamp(1, n.saturating_sub(1).max(1));
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    let train = indices.split_off(n_test);
    (train, indices)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn build_models(config: &PredictionConfig) -> Vec<Box<dyn Regressor>> {
    vec![
        Box::new(LinearRegression::default()),
        Box::new(PolynomialRegression::new(2)),
        Box::new(DecisionTreeRegressor::default()),
        Box::new(RandomForestRegressor::new(config.forest_size, config.seed)),
    ]
}

/// 预测学生成绩走势
pub fn predict_performance(
    student: &Student,
    config: &PredictionConfig,
) -> Result<PredictionResponse> {
    let series: Vec<(&str, f64)> = student.graded_courses().collect();
    if series.len() < MIN_PREDICTION_POINTS {
        return Err(SGSError::insufficient_data("Not enough data for prediction"));
    }

    let (train, test) = train_test_split(series.len(), config.test_size, config.seed);
    let train_x: Vec<f64> = train.iter().map(|&i| i as f64).collect();
    let train_y: Vec<f64> = train.iter().map(|&i| series[i].1).collect();
    let test_x: Vec<f64> = test.iter().map(|&i| i as f64).collect();

    let held_out: Vec<HeldOutPoint> = test
        .iter()
        .map(|&i| HeldOutPoint {
            index: i,
            course: series[i].0.to_string(),
            actual: series[i].1,
        })
        .collect();

    let next_index = series.len() as f64;
    let mut models = Vec::new();
    for mut model in build_models(config) {
        model.fit(&train_x, &train_y)?;
        let predicted = model.predict(&test_x);
        let mae = predicted
            .iter()
            .zip(&held_out)
            .map(|(p, point)| (p - point.actual).abs())
            .sum::<f64>()
            / held_out.len() as f64;

        debug!(
            "Model {} for student {}: MAE {:.3}",
            model.name(),
            student.id,
            mae
        );

        models.push(ModelPrediction {
            model: model.name().to_string(),
            predicted_grades: predicted.into_iter().map(round2).collect(),
            mean_absolute_error: round2(mae),
            next_course_forecast: round2(model.predict_one(next_index).clamp(0.0, 100.0)),
        });
    }

    Ok(PredictionResponse {
        student_id: student.id.clone(),
        data_points: series.len(),
        held_out,
        models,
    })
}
