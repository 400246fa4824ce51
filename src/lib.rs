//! Student Grading System - 学生成绩管理服务
//!
//! 基于 Actix Web 构建的学生、教师、课程与成绩管理后端，数据仅保存在进程内存中。
//!
//! # 架构
//! - `analytics`: 成绩预测（回归模型）与柱状图
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权与限流中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（内存）
//! - `utils`: 工具函数

pub mod analytics;
pub mod config;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
