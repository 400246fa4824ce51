//! 配置管理
//!
//! 配置来源按优先级由低到高：内置默认值、`config.toml`、`config.{APP_ENV}.toml`、
//! `SGS_` 前缀的环境变量以及若干常用的独立环境变量。

mod r#impl;
mod structs;

pub use structs::*;
