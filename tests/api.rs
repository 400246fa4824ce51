use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use student_grading_system::config::{AdminConfig, AppConfig, SeedConfig};
use student_grading_system::routes;
use student_grading_system::runtime::lifetime::startup::{seed_admin, seed_demo_roster};
use student_grading_system::storage::{Storage, create_storage};
use student_grading_system::utils::{json_error_handler, query_error_handler};

const ADMIN_PASSWORD: &str = "admin-pass";
const TEACHER_PASSWORD: &str = "guru42";

// 登录接口按 IP 限流，每次登录使用不同的客户端地址
static NEXT_PEER: AtomicU32 = AtomicU32::new(1);

fn next_peer() -> SocketAddr {
    let n = NEXT_PEER.fetch_add(1, Ordering::SeqCst);
    SocketAddr::from(([10, (n >> 16) as u8, (n >> 8) as u8, n as u8], 40000))
}

async fn gradebook(demo: bool) -> Arc<dyn Storage> {
    let storage = create_storage().await.unwrap();
    let admin = AdminConfig {
        username: AppConfig::get().admin.username.clone(),
        password: ADMIN_PASSWORD.to_string(),
    };
    seed_admin(storage.as_ref(), &admin).await.unwrap();
    if demo {
        seed_demo_roster(storage.as_ref(), &SeedConfig::default())
            .await
            .unwrap();
    }
    storage
}

macro_rules! init_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .configure(routes::configure_auth_routes)
                .configure(routes::configure_student_routes)
                .configure(routes::configure_teacher_routes)
                .configure(routes::configure_course_routes)
                .configure(routes::configure_frontend_routes),
        )
        .await
    };
}

macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

macro_rules! login {
    ($app:expr, $user_type:expr, $username:expr, $password:expr) => {{
        let (status, body) = call_json!(
            $app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .peer_addr(next_peer())
                .set_json(json!({
                    "user_type": $user_type,
                    "username": $username,
                    "password": $password,
                }))
        );
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["data"]["access_token"].as_str().unwrap().to_string()
    }};
}

fn admin_name() -> String {
    AppConfig::get().admin.username.clone()
}

fn get(uri: &str, token: &str) -> test::TestRequest {
    test::TestRequest::get()
        .uri(uri)
        .insert_header(("Authorization", format!("Bearer {token}")))
}

fn post(uri: &str, token: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(body)
}

fn delete(uri: &str, token: &str) -> test::TestRequest {
    test::TestRequest::delete()
        .uri(uri)
        .insert_header(("Authorization", format!("Bearer {token}")))
}

#[actix_web::test]
async fn test_login_checks_user_type_and_password() {
    let storage = gradebook(true).await;
    let app = init_app!(storage);

    let admin = admin_name();
    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .peer_addr(next_peer())
            .set_json(json!({"user_type": "admin", "username": admin, "password": ADMIN_PASSWORD}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["user"]["role"], "admin");

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .peer_addr(next_peer())
            .set_json(json!({"user_type": "admin", "username": admin, "password": "nope"}))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 2000);

    // 教师账号不能以管理员身份登录
    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .peer_addr(next_peer())
            .set_json(json!({"user_type": "admin", "username": "guru", "password": TEACHER_PASSWORD}))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .peer_addr(next_peer())
            .set_json(json!({"user_type": "student", "username": "101", "password": "x"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1000);

    let token = login!(app, "teacher", "guru", TEACHER_PASSWORD);
    let (status, body) = call_json!(app, get("/api/v1/auth/me", &token));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["id"], "guru");
    assert_eq!(body["data"]["user"]["courses"], json!(["Python"]));
}

#[actix_web::test]
async fn test_login_is_rate_limited_per_client() {
    let storage = gradebook(false).await;
    let app = init_app!(storage);

    let peer = next_peer();
    let max = AppConfig::get().rate_limit.login_max_requests;
    for _ in 0..max {
        let (status, _) = call_json!(
            app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .peer_addr(peer)
                .set_json(json!({"user_type": "teacher", "username": "ghost", "password": "x"}))
        );
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .peer_addr(peer)
            .set_json(json!({"user_type": "teacher", "username": "ghost", "password": "x"}))
    );
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], 1029);
}

#[actix_web::test]
async fn test_refresh_cookie_issues_new_access_token() {
    let storage = gradebook(true).await;
    let app = init_app!(storage);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .peer_addr(next_peer())
            .set_json(json!({"user_type": "teacher", "username": "guru1", "password": TEACHER_PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "refresh_token")
        .map(|c| c.into_owned())
        .unwrap();

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .peer_addr(next_peer())
            .cookie(cookie)
    );
    assert_eq!(status, StatusCode::OK);
    let token = body["data"]["access_token"].as_str().unwrap();
    let (status, _) = call_json!(app, get("/api/v1/auth/verify-token", token));
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .peer_addr(next_peer())
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_routes_are_gated_by_role() {
    let storage = gradebook(true).await;
    let app = init_app!(storage);
    let teacher = login!(app, "teacher", "guru", TEACHER_PASSWORD);

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/v1/students"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1001);

    let (status, body) = call_json!(app, get("/api/v1/teachers", &teacher));
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 1003);

    let (status, _) = call_json!(
        app,
        post("/api/v1/students", &teacher, json!({"id": "200", "name": "Luna", "age": 19}))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call_json!(app, get("/api/v1/students/101/report", &teacher));
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call_json!(app, get("/api/v1/students", &teacher));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 3);

    let (status, _) = call_json!(app, get("/api/v1/students/101/average", &teacher));
    assert_eq!(status, StatusCode::OK);

    // 管理员不能登记成绩
    let admin = login!(app, "admin", admin_name(), ADMIN_PASSWORD);
    let (status, _) = call_json!(
        app,
        post(
            "/api/v1/students/101/grades",
            &admin,
            json!({"course": "Python", "grade": 50})
        )
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call_json!(app, get("/api/v1/not-a-route", &admin));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_student_lifecycle() {
    let storage = gradebook(true).await;
    let app = init_app!(storage);
    let admin = login!(app, "admin", admin_name(), ADMIN_PASSWORD);

    let (status, body) = call_json!(
        app,
        post("/api/v1/students", &admin, json!({"id": "104", "name": "Ginny", "age": "19"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["student"]["age"], 19);

    let (status, body) = call_json!(
        app,
        post("/api/v1/students", &admin, json!({"id": "104", "name": "Ginny", "age": 19}))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Student ID already exists");

    // 重复 ID 优先于年龄错误
    let (status, body) = call_json!(
        app,
        post("/api/v1/students", &admin, json!({"id": "101", "name": "X", "age": "abc"}))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Student ID already exists");

    let (status, body) = call_json!(
        app,
        post("/api/v1/students", &admin, json!({"id": "105", "name": "Neville", "age": "abc"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid age, please try again");

    let (status, body) = call_json!(
        app,
        post("/api/v1/students", &admin, json!({"id": "105", "name": "Neville", "age": 0}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Age is not valid");

    let (status, body) = call_json!(
        app,
        post("/api/v1/students/104/courses", &admin, json!({"course": "Quidditch"}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid course name!");

    let (status, _) = call_json!(
        app,
        post("/api/v1/students/104/courses", &admin, json!({"course": "NLP"}))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call_json!(
        app,
        post("/api/v1/students/104/courses", &admin, json!({"course": "NLP"}))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Course already assigned to the student");

    let (status, body) = call_json!(app, get("/api/v1/students/104/report", &admin));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["rows"], json!([{"course": "NLP", "grade": null}]));

    let (status, body) = call_json!(app, get("/api/v1/students/104/average", &admin));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "No grades available for this student");

    let (status, body) = call_json!(app, get("/api/v1/students/101/average", &admin));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["average"], 89.5);

    let (status, _) = call_json!(app, delete("/api/v1/students/104", &admin));
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call_json!(app, get("/api/v1/students/104", &admin));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Student not found!");

    let (status, _) = call_json!(app, delete("/api/v1/students/104", &admin));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_grade_assignment_rules() {
    let storage = gradebook(true).await;
    let app = init_app!(storage);
    let admin = login!(app, "admin", admin_name(), ADMIN_PASSWORD);
    let guru = login!(app, "teacher", "guru", TEACHER_PASSWORD);

    let (status, body) = call_json!(
        app,
        post("/api/v1/students/101/grades", &guru, json!({"course": "Python", "grade": "95"}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["graded_by"], "guru");
    assert_eq!(body["data"]["grade"], 95.0);

    let (status, body) = call_json!(
        app,
        post("/api/v1/students/101/grades", &guru, json!({"course": "Python", "grade": 101}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6000);

    let (status, body) = call_json!(
        app,
        post("/api/v1/students/101/grades", &guru, json!({"course": "Python", "grade": "A+"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid grade, try again");

    let (status, body) = call_json!(
        app,
        post(
            "/api/v1/students/101/grades",
            &guru,
            json!({"course": "Data Science with Python", "grade": 70})
        )
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "You cannot assign a grade for this course");
    assert_eq!(body["code"], 6001);

    // 任课检查先于成绩范围
    let (status, body) = call_json!(
        app,
        post(
            "/api/v1/students/101/grades",
            &guru,
            json!({"course": "Data Science with Python", "grade": 150})
        )
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "You cannot assign a grade for this course");

    let (status, body) = call_json!(
        app,
        post("/api/v1/students/102/grades", &guru, json!({"course": "Python", "grade": 70}))
    );
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Course not assigned to student");

    let (status, _) = call_json!(
        app,
        post("/api/v1/students/999/grades", &guru, json!({"course": "Python", "grade": 70}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call_json!(
        app,
        post("/api/v1/students/999/grades", &guru, json!({"course": "Python", "grade": "abc"}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Student not found!");

    let (_, body) = call_json!(app, get("/api/v1/students/101/report", &admin));
    assert_eq!(body["data"]["rows"][0], json!({"course": "Python", "grade": 95.0}));
}

#[actix_web::test]
async fn test_teacher_management() {
    let storage = gradebook(true).await;
    let app = init_app!(storage);
    let admin = login!(app, "admin", admin_name(), ADMIN_PASSWORD);

    let (status, body) = call_json!(
        app,
        post(
            "/api/v1/teachers",
            &admin,
            json!({"id": "snape", "name": "Severus", "password": "potions1", "course": "Python"})
        )
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Course 'Python' is already assigned to guru");

    let (status, body) = call_json!(
        app,
        post(
            "/api/v1/teachers",
            &admin,
            json!({"id": "guru", "name": "Dup", "password": "x1", "course": "Potions"})
        )
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Teacher ID already exists");

    let (status, body) = call_json!(
        app,
        post(
            "/api/v1/teachers",
            &admin,
            json!({"id": "snape", "name": "Severus", "password": "potions1", "course": "Potions"})
        )
    );
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["teacher"].get("password_hash").is_none());

    // 新课程自动加入目录
    let (_, body) = call_json!(app, get("/api/v1/courses", &admin));
    let potions = body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Potions")
        .cloned()
        .unwrap();
    assert_eq!(potions["teacher_id"], "snape");

    let (status, body) = call_json!(app, get("/api/v1/teachers", &admin));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 7);

    let (status, body) = call_json!(app, delete("/api/v1/teachers/nobody", &admin));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Teacher not found!");
}

#[actix_web::test]
async fn test_removed_teacher_loses_access() {
    let storage = gradebook(true).await;
    let app = init_app!(storage);
    let admin = login!(app, "admin", admin_name(), ADMIN_PASSWORD);
    let guru5 = login!(app, "teacher", "guru5", TEACHER_PASSWORD);

    let (status, _) = call_json!(app, get("/api/v1/students", &guru5));
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call_json!(app, delete("/api/v1/teachers/guru5", &admin));
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call_json!(app, get("/api/v1/students", &guru5));
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // 课程归属被释放
    let (_, body) = call_json!(app, get("/api/v1/courses", &admin));
    let nlp = body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "NLP")
        .cloned()
        .unwrap();
    assert!(nlp["teacher_id"].is_null());
}

#[actix_web::test]
async fn test_course_catalog() {
    let storage = gradebook(true).await;
    let app = init_app!(storage);
    let admin = login!(app, "admin", admin_name(), ADMIN_PASSWORD);

    let (status, _) = call_json!(app, post("/api/v1/courses", &admin, json!({"name": "Herbology"})));
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = call_json!(app, post("/api/v1/courses", &admin, json!({"name": "Herbology"})));
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = call_json!(app, delete("/api/v1/courses/Python", &admin));
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 5005);

    let (status, _) = call_json!(app, delete("/api/v1/courses/Herbology", &admin));
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call_json!(app, delete("/api/v1/courses/Herbology", &admin));
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 课程名中的保留字符经 URL 编码后仍能删除
    let (status, _) = call_json!(app, post("/api/v1/courses", &admin, json!({"name": "CI/CD"})));
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call_json!(app, delete("/api/v1/courses/CI%2FCD", &admin));
    assert_eq!(status, StatusCode::OK, "{body}");

    let (_, body) = call_json!(app, get("/api/v1/courses", &admin));
    assert!(
        body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .all(|c| c["name"] != "CI/CD")
    );
}

#[actix_web::test]
async fn test_prediction_and_chart() {
    let storage = gradebook(true).await;
    let app = init_app!(storage);
    let admin = login!(app, "admin", admin_name(), ADMIN_PASSWORD);
    let teacher = login!(app, "teacher", "guru2", TEACHER_PASSWORD);

    let (status, body) = call_json!(app, get("/api/v1/students/103/prediction", &teacher));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["data_points"], 2);
    assert_eq!(body["data"]["models"].as_array().unwrap().len(), 4);

    let (status, _) = call_json!(
        app,
        post("/api/v1/students", &admin, json!({"id": "106", "name": "Dean", "age": 20}))
    );
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = call_json!(app, get("/api/v1/students/106/prediction", &admin));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Not enough data for prediction");

    let resp = test::call_service(&app, get("/api/v1/students/101/chart", &teacher).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("image/svg+xml"))
    );
    let svg = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&svg).contains("Student 101 Performance"));

    let (status, body) = call_json!(app, get("/api/v1/students/106/chart", &admin));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "No grades available for plotting");
}

#[actix_web::test]
async fn test_frontend_is_served() {
    let storage = gradebook(false).await;
    let app = init_app!(storage);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = test::read_body(resp).await;
    assert!(!String::from_utf8_lossy(&html).contains("%SYSTEM_NAME%"));
}
