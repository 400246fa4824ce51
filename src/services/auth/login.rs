use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use crate::errors::Result;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
    users::entities::{User, UserRole},
};
use crate::storage::Storage;
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

/// 管理员登录：用户名须与配置的管理员一致
pub async fn authenticate_admin(
    storage: &dyn Storage,
    username: &str,
    password: &str,
) -> Result<Option<User>> {
    let Some(hash) = storage.get_admin_password_hash(username).await? else {
        return Ok(None);
    };
    Ok(verify_password(password, &hash).then(|| User::admin(username)))
}

/// 教师登录：按教师 ID 校验密码
pub async fn authenticate_teacher(
    storage: &dyn Storage,
    teacher_id: &str,
    password: &str,
) -> Result<Option<User>> {
    let Some(teacher) = storage.get_teacher_by_id(teacher_id).await? else {
        return Ok(None);
    };
    Ok(verify_password(password, &teacher.password_hash).then(|| User::from(&teacher)))
}

/// 按登录表单中选择的用户类型校验凭据
pub async fn verify_login(
    storage: &dyn Storage,
    user_type: &UserRole,
    user_id: &str,
    password: &str,
) -> Result<Option<User>> {
    match user_type {
        UserRole::Admin => authenticate_admin(storage, user_id, password).await,
        UserRole::Teacher => authenticate_teacher(storage, user_id, password).await,
    }
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 校验凭据
    let user = match verify_login(
        storage.as_ref(),
        &login_request.user_type,
        login_request.username.trim(),
        &login_request.password,
    )
    .await
    {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!(
                "Failed {} login attempt for {}",
                login_request.user_type,
                login_request.username.trim()
            );
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "Invalid credentials",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {e}"),
                )),
            );
        }
    };

    // 2. 生成令牌对
    match user.generate_token_pair(
        login_request
            .remember_me
            .then(|| chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)),
    ) {
        Ok(token_pair) => {
            info!("{} {} logged in successfully", user.role, user.id);

            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                user,
                created_at: chrono::Utc::now(),
            };

            // 3. 创建 refresh token cookie
            let refresh_cookie =
                jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

            Ok(HttpResponse::Ok()
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_storage::MemoryStorage;
    use crate::utils::password::hash_password;

    async fn storage() -> MemoryStorage {
        let storage = MemoryStorage::new();
        storage
            .set_admin("admin", hash_password("admin-pass").unwrap())
            .await
            .unwrap();
        storage
            .create_teacher("guru", "Guru", hash_password("guru42").unwrap(), "Python")
            .await
            .unwrap();
        storage
    }

    #[actix_web::test]
    async fn test_verify_login_by_user_type() {
        let storage = storage().await;

        let admin = verify_login(&storage, &UserRole::Admin, "admin", "admin-pass")
            .await
            .unwrap()
            .unwrap();
        assert!(admin.is_admin());

        let teacher = verify_login(&storage, &UserRole::Teacher, "guru", "guru42")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(teacher.courses, vec!["Python".to_string()]);

        // 用户类型与账号不匹配
        assert!(
            verify_login(&storage, &UserRole::Admin, "guru", "guru42")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            verify_login(&storage, &UserRole::Teacher, "guru", "wrong")
                .await
                .unwrap()
                .is_none()
        );
    }
}
