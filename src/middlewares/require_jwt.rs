/*!
 * JWT 认证中间件
 *
 * 此中间件用于验证 JWT 令牌的有效性，确保只有经过身份验证的用户才能访问受保护的路由。
 *
 * ## 使用方法
 *
 * 1. 在路由上应用中间件：
 * ```rust,ignore
 * use actix_web::{web, App, HttpServer};
 * use crate::middlewares::require_jwt::RequireJWT;
 *
 * HttpServer::new(|| {
 *     App::new()
 *         .service(
 *             web::scope("/api")
 *                 .wrap(RequireJWT)  // 应用JWT验证中间件
 *                 .route("/protected", web::get().to(protected_handler))
 *         )
 * })
 * ```
 *
 * 2. 在处理程序中提取用户信息：
 * ```rust,ignore
 * use actix_web::{web, HttpRequest, HttpResponse, Result};
 * use crate::middlewares::require_jwt::RequireJWT;
 *
 * async fn protected_handler(req: HttpRequest) -> Result<HttpResponse> {
 *     // 提取用户Claims
 *     if let Some(claims) = RequireJWT::extract_user_claims(&req) {
 *         return Ok(HttpResponse::Ok().json(format!("Hello, {}! Role: {}", claims.name, claims.role)));
 *     }
 *
 *     // 或者只提取用户ID
 *     if let Some(user_id) = RequireJWT::extract_user_id(&req) {
 *         return Ok(HttpResponse::Ok().json(format!("User ID: {}", user_id)));
 *     }
 *
 *     // 检查用户角色
 *     if RequireJWT::extract_user_role(&req) == Some(UserRole::Admin) {
 *         return Ok(HttpResponse::Ok().json("Admin access granted"));
 *     }
 *
 *     Ok(HttpResponse::InternalServerError().finish())
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`
 * 2. 中间件提取并验证JWT令牌
 * 3. 按 token 中的身份从存储中重新解析用户（管理员或教师），
 *    已被删除的教师即使持有未过期的 token 也会被拒绝
 * 4. 解析成功后将用户信息存储在请求扩展中，继续处理请求
 * 5. 如果令牌无效、缺失或用户不存在，返回401未授权错误
 *
 * ## 配置
 *
 * 签名密钥来自 `jwt.secret`（或环境变量 `JWT_SECRET`），未配置时启动阶段随机生成。
 */

use crate::config::AppConfig;
use crate::models::ErrorCode;
use crate::models::users::entities::{self, UserRole};
use crate::storage::Storage;
use crate::utils::jwt::{Claims, JwtUtils};
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

/// 根据 token 中的身份重新从存储中解析当前用户
///
/// 管理员要求用户名仍与配置一致，教师要求仍在教师表中。
pub async fn resolve_user(
    storage: &dyn Storage,
    claims: &Claims,
) -> Result<Option<entities::User>, String> {
    let role = claims
        .role
        .parse::<UserRole>()
        .map_err(|_| "Invalid role in JWT".to_string())?;

    match role {
        UserRole::Admin => {
            if claims.sub != AppConfig::get().admin.username {
                return Ok(None);
            }
            let hash = storage
                .get_admin_password_hash(&claims.sub)
                .await
                .map_err(|_| "Failed to retrieve admin from storage".to_string())?;
            Ok(hash.map(|_| entities::User::admin(&claims.sub)))
        }
        UserRole::Teacher => {
            let teacher = storage
                .get_teacher_by_id(&claims.sub)
                .await
                .map_err(|_| "Failed to retrieve teacher from storage".to_string())?;
            Ok(teacher.as_ref().map(entities::User::from))
        }
    }
}

// 辅助函数：提取并验证 JWT access token
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<entities::User, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .ok_or_else(|| "Storage not found in app data".to_string())?
        .get_ref()
        .clone();

    resolve_user(storage.as_ref(), &claims)
        .await?
        .ok_or_else(|| "User not found".to_string())
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            // 验证 JWT token
            match extract_and_validate_jwt(&req).await {
                Ok(user) => {
                    debug!(
                        "JWT authentication successful for {} {}",
                        user.role, user.id
                    );
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取用户信息
impl RequireJWT {
    /// 从请求扩展中提取用户Claims信息
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_user_claims(req: &actix_web::HttpRequest) -> Option<entities::User> {
        req.extensions().get::<entities::User>().cloned()
    }

    /// 从请求扩展中提取用户ID
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<String> {
        req.extensions()
            .get::<entities::User>()
            .map(|user| user.id.clone())
    }

    /// 从请求扩展中提取用户角色
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_user_role(req: &actix_web::HttpRequest) -> Option<UserRole> {
        req.extensions()
            .get::<entities::User>()
            .map(|user| user.role.clone())
    }
}
