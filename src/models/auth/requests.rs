use serde::Deserialize;

use crate::models::users::entities::UserRole;

// 登录请求（对应登录表单：用户类型 + 用户名 + 密码）
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user_type: UserRole,
    pub username: String,
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}
