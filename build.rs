use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=frontend/dist");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let dist_path = Path::new(&manifest_dir).join("frontend/dist");

    // rust-embed 要求目录存在，缺失时写入占位页面
    if !dist_path.join("index.html").exists() {
        println!("cargo:warning=frontend/dist/index.html not found, embedding a placeholder page");
        create_fallback_files(&dist_path);
    }
}

fn create_fallback_files(dist_path: &Path) {
    fs::create_dir_all(dist_path).expect("Failed to create dist directory");

    let fallback_html = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>%SYSTEM_NAME%</title>
</head>
<body>
    <h1>%SYSTEM_NAME%</h1>
    <p>The login page is missing from <code>frontend/dist/</code>.</p>
    <p>The HTTP API under <code>/api/v1</code> is still available.</p>
</body>
</html>"#;

    fs::write(dist_path.join("index.html"), fallback_html)
        .expect("Failed to write fallback index.html");
}
