//! 一维回归模型
//!
//! 特征只有一个（课程序号），样本量通常不超过十个，全部在内存中直接求解。

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::errors::{Result, SGSError};

const PIVOT_EPSILON: f64 = 1e-9;

pub trait Regressor: Send {
    fn name(&self) -> &'static str;

    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()>;

    fn predict_one(&self, x: f64) -> f64;

    fn predict(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict_one(x)).collect()
    }
}

fn check_training_data(x: &[f64], y: &[f64]) -> Result<()> {
    if x.is_empty() {
        return Err(SGSError::insufficient_data("No training samples"));
    }
    if x.len() != y.len() {
        return Err(SGSError::validation(format!(
            "Feature/target length mismatch: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    Ok(())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// 最小二乘多项式拟合，返回从常数项开始的系数
///
/// 法方程奇异（样本不足或特征共线）时逐级降低阶数，最终退化为均值。
fn least_squares(x: &[f64], y: &[f64], degree: usize) -> Vec<f64> {
    for d in (1..=degree).rev() {
        if let Some(coefficients) = solve_normal_equations(x, y, d) {
            return coefficients;
        }
    }
    vec![mean(y)]
}

fn solve_normal_equations(x: &[f64], y: &[f64], degree: usize) -> Option<Vec<f64>> {
    let size = degree + 1;
    // 增广矩阵 [XᵀX | Xᵀy]
    let mut matrix = vec![vec![0.0; size + 1]; size];
    for (&xi, &yi) in x.iter().zip(y) {
        let powers: Vec<f64> = (0..size).map(|p| xi.powi(p as i32)).collect();
        for row in 0..size {
            for col in 0..size {
                matrix[row][col] += powers[row] * powers[col];
            }
            matrix[row][size] += powers[row] * yi;
        }
    }

    // 部分主元高斯消元
    for col in 0..size {
        let pivot_row = (col..size).max_by(|&a, &b| {
            matrix[a][col]
                .abs()
                .partial_cmp(&matrix[b][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if matrix[pivot_row][col].abs() < PIVOT_EPSILON {
            return None;
        }
        matrix.swap(col, pivot_row);

        for row in 0..size {
            if row == col {
                continue;
            }
            let factor = matrix[row][col] / matrix[col][col];
            for k in col..=size {
                matrix[row][k] -= factor * matrix[col][k];
            }
        }
    }

    Some((0..size).map(|i| matrix[i][size] / matrix[i][i]).collect())
}

fn evaluate_polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * x + c)
}

/// 线性回归
#[derive(Debug, Default, Clone)]
pub struct LinearRegression {
    coefficients: Vec<f64>,
}

impl LinearRegression {
    pub fn slope(&self) -> f64 {
        self.coefficients.get(1).copied().unwrap_or(0.0)
    }

    pub fn intercept(&self) -> f64 {
        self.coefficients.first().copied().unwrap_or(0.0)
    }
}

impl Regressor for LinearRegression {
    fn name(&self) -> &'static str {
        "Linear Regression"
    }

    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        check_training_data(x, y)?;
        self.coefficients = least_squares(x, y, 1);
        Ok(())
    }

    fn predict_one(&self, x: f64) -> f64 {
        evaluate_polynomial(&self.coefficients, x)
    }
}

/// 多项式回归
#[derive(Debug, Clone)]
pub struct PolynomialRegression {
    degree: usize,
    coefficients: Vec<f64>,
}

impl PolynomialRegression {
    pub fn new(degree: usize) -> Self {
        Self {
            degree: degree.max(1),
            coefficients: Vec::new(),
        }
    }

    /// 实际拟合的阶数（样本不足时低于配置值）
    pub fn fitted_degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

impl Regressor for PolynomialRegression {
    fn name(&self) -> &'static str {
        "Polynomial Regression"
    }

    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        check_training_data(x, y)?;
        self.coefficients = least_squares(x, y, self.degree);
        Ok(())
    }

    fn predict_one(&self, x: f64) -> f64 {
        evaluate_polynomial(&self.coefficients, x)
    }
}

#[derive(Debug, Clone)]
enum TreeNode {
    Leaf(f64),
    Split {
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    fn predict(&self, x: f64) -> f64 {
        match self {
            TreeNode::Leaf(value) => *value,
            TreeNode::Split {
                threshold,
                left,
                right,
            } => {
                if x <= *threshold {
                    left.predict(x)
                } else {
                    right.predict(x)
                }
            }
        }
    }
}

/// 决策树回归（CART，平方误差准则，完全生长）
#[derive(Debug, Default, Clone)]
pub struct DecisionTreeRegressor {
    root: Option<TreeNode>,
}

impl DecisionTreeRegressor {
    fn build(samples: &mut [(f64, f64)]) -> TreeNode {
        let targets: Vec<f64> = samples.iter().map(|&(_, y)| y).collect();
        let leaf_value = mean(&targets);
        if samples.len() < 2 || targets.iter().all(|&y| y == targets[0]) {
            return TreeNode::Leaf(leaf_value);
        }

        samples.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut best: Option<(f64, usize)> = None;
        let mut best_error = f64::INFINITY;
        for split in 1..samples.len() {
            // 相同特征值不可分
            if samples[split - 1].0 == samples[split].0 {
                continue;
            }
            let error = sum_squared_error(&samples[..split]) + sum_squared_error(&samples[split..]);
            if error < best_error {
                best_error = error;
                best = Some(((samples[split - 1].0 + samples[split].0) / 2.0, split));
            }
        }

        match best {
            Some((threshold, split)) => {
                let (left, right) = samples.split_at_mut(split);
                TreeNode::Split {
                    threshold,
                    left: Box::new(Self::build(left)),
                    right: Box::new(Self::build(right)),
                }
            }
            None => TreeNode::Leaf(leaf_value),
        }
    }
}

fn sum_squared_error(samples: &[(f64, f64)]) -> f64 {
    let targets: Vec<f64> = samples.iter().map(|&(_, y)| y).collect();
    let m = mean(&targets);
    targets.iter().map(|y| (y - m).powi(2)).sum()
}

impl Regressor for DecisionTreeRegressor {
    fn name(&self) -> &'static str {
        "Decision Tree"
    }

    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        check_training_data(x, y)?;
        let mut samples: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
        self.root = Some(Self::build(&mut samples));
        Ok(())
    }

    fn predict_one(&self, x: f64) -> f64 {
        self.root.as_ref().map_or(0.0, |root| root.predict(x))
    }
}

/// 随机森林回归：自助采样训练多棵决策树并取平均
#[derive(Debug, Clone)]
pub struct RandomForestRegressor {
    n_estimators: usize,
    seed: u64,
    trees: Vec<DecisionTreeRegressor>,
}

impl RandomForestRegressor {
    pub fn new(n_estimators: usize, seed: u64) -> Self {
        Self {
            n_estimators: n_estimators.max(1),
            seed,
            trees: Vec::new(),
        }
    }
}

impl Regressor for RandomForestRegressor {
    fn name(&self) -> &'static str {
        "Random Forest"
    }

    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        check_training_data(x, y)?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let n = x.len();

        self.trees = (0..self.n_estimators)
            .map(|_| {
                let (bx, by): (Vec<f64>, Vec<f64>) = (0..n)
                    .map(|_| {
                        let i = rng.random_range(0..n);
                        (x[i], y[i])
                    })
                    .unzip();
                let mut tree = DecisionTreeRegressor::default();
                tree.fit(&bx, &by).map(|_| tree)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(())
    }

    fn predict_one(&self, x: f64) -> f64 {
        if self.trees.is_empty() {
            return 0.0;
        }
        self.trees.iter().map(|t| t.predict_one(x)).sum::<f64>() / self.trees.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_linear_fits_exact_line() {
        let mut model = LinearRegression::default();
        model.fit(&[0.0, 1.0, 2.0, 3.0], &[60.0, 70.0, 80.0, 90.0]).unwrap();
        assert!(approx(model.slope(), 10.0));
        assert!(approx(model.intercept(), 60.0));
        assert!(approx(model.predict_one(4.0), 100.0));
    }

    #[test]
    fn test_linear_single_point_is_constant() {
        let mut model = LinearRegression::default();
        model.fit(&[1.0], &[78.0]).unwrap();
        assert!(approx(model.slope(), 0.0));
        assert!(approx(model.predict_one(5.0), 78.0));
    }

    #[test]
    fn test_polynomial_recovers_quadratic() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v| 50.0 + 2.0 * v + 1.5 * v * v).collect();
        let mut model = PolynomialRegression::new(2);
        model.fit(&x, &y).unwrap();
        assert_eq!(model.fitted_degree(), 2);
        assert!(approx(model.predict_one(5.0), 50.0 + 10.0 + 37.5));
    }

    #[test]
    fn test_polynomial_degrades_with_two_points() {
        let mut model = PolynomialRegression::new(2);
        model.fit(&[0.0, 2.0], &[80.0, 90.0]).unwrap();
        assert_eq!(model.fitted_degree(), 1);
        assert!(approx(model.predict_one(1.0), 85.0));
    }

    #[test]
    fn test_decision_tree_memorizes_training_points() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [90.0, 60.0, 75.0, 88.0];
        let mut model = DecisionTreeRegressor::default();
        model.fit(&x, &y).unwrap();
        for (xi, yi) in x.iter().zip(y) {
            assert!(approx(model.predict_one(*xi), yi));
        }
        // 阈值取相邻特征值中点
        assert!(approx(model.predict_one(0.4), 90.0));
        assert!(approx(model.predict_one(0.6), 60.0));
    }

    #[test]
    fn test_random_forest_is_deterministic_and_bounded() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [70.0, 72.0, 80.0, 85.0, 91.0];
        let mut a = RandomForestRegressor::new(50, 42);
        let mut b = RandomForestRegressor::new(50, 42);
        a.fit(&x, &y).unwrap();
        b.fit(&x, &y).unwrap();
        for probe in [0.0, 2.5, 10.0] {
            let pa = a.predict_one(probe);
            assert!(approx(pa, b.predict_one(probe)));
            assert!((70.0..=91.0).contains(&pa));
        }
    }

    #[test]
    fn test_fit_rejects_bad_input() {
        let mut model = LinearRegression::default();
        assert!(matches!(
            model.fit(&[], &[]),
            Err(SGSError::InsufficientData(_))
        ));
        assert!(matches!(
            model.fit(&[0.0, 1.0], &[1.0]),
            Err(SGSError::Validation(_))
        ));
    }
}
