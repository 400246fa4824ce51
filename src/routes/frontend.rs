//! 登录表单与仪表盘页面
//!
//! 页面由 rust-embed 在编译期嵌入，`./frontend-custom/` 下的同名文件优先（开发用）。
//! HTML 中的 `%SYSTEM_NAME%` 占位符替换为配置中的系统名称。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

use crate::config::AppConfig;

#[derive(Embed)]
#[folder = "frontend/dist/"]
struct FrontendAssets;

fn get_mime_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "html" => "text/html; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

fn render_html(content: &[u8], config: &AppConfig) -> Vec<u8> {
    String::from_utf8_lossy(content)
        .replace("%SYSTEM_NAME%", &config.app.system_name)
        .into_bytes()
}

fn get_file(path: &str) -> Option<Vec<u8>> {
    std::fs::read(format!("./frontend-custom/{path}"))
        .ok()
        .or_else(|| FrontendAssets::get(path).map(|f| f.data.to_vec()))
}

/// 页面请求处理，未知路径回落到 index.html
pub async fn serve_frontend(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');
    let config = AppConfig::get();

    // 不让页面回落吞掉拼错的 API 路径
    if path.starts_with("api/") {
        return Ok(HttpResponse::NotFound().json(crate::models::ApiResponse::error_empty(
            crate::models::ErrorCode::NotFound,
            "Endpoint not found",
        )));
    }

    let (content, file_path) = match (!path.is_empty()).then(|| get_file(path)).flatten() {
        Some(content) => (Some(content), path),
        None => (get_file("index.html"), "index.html"),
    };

    match content {
        Some(mut data) => {
            let mime = get_mime_type(file_path);
            if mime.starts_with("text/html") {
                data = render_html(&data, config);
            }
            Ok(HttpResponse::Ok()
                .content_type(mime)
                .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
                .body(data))
        }
        None => Ok(HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(format!(
                "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title></head>\
                 <body><h1>Frontend Not Found</h1>\
                 <p>The login page was not embedded into this build.</p></body></html>",
                config.app.system_name
            ))),
    }
}

/// 配置前端路由（放在最后作为 fallback）
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{tail:.*}", web::get().to(serve_frontend));
}
