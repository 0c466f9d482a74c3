mod common;

use actix_web::{http::StatusCode, test, App};
use common::context;
use post_service::routes;
use serde_json::{json, Value};

#[actix_web::test]
async fn register_login_and_fetch_profile() {
    let ctx = context();
    let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &ctx.state))).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Test User",
            "username": "testuser",
            "email": "Test@Example.com",
            "password": "SecurePass123!"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let registered: Value = test::read_body_json(resp).await;
    assert!(registered["token"].as_str().is_some());
    assert_eq!(registered["user"]["email"], "test@example.com");
    assert!(registered["user"].get("password_hash").is_none());

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "email": "test@example.com",
            "password": "SecurePass123!"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let login: Value = test::read_body_json(resp).await;
    let token = login["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/users/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["username"], "testuser");
    assert_eq!(me["id"], registered["user"]["id"]);
}

#[actix_web::test]
async fn duplicate_email_conflicts() {
    let ctx = context();
    let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &ctx.state))).await;

    let body = json!({
        "name": "Dup",
        "username": "dup",
        "email": "dup@example.com",
        "password": "SecurePass123!"
    });

    let first = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(&body)
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

    let second = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, second).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["message"], "Email already registered");
}

#[actix_web::test]
async fn register_rejects_invalid_body() {
    let ctx = context();
    let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &ctx.state))).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Short",
            "username": "short",
            "email": "not-an-email",
            "password": "123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn login_with_wrong_password_is_unauthorized() {
    let ctx = context();
    ctx.signed_in_user("alice").await;
    let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &ctx.state))).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "email": "alice@example.com",
            "password": "WrongPassword!"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["message"], "Invalid email or password");
}

#[actix_web::test]
async fn login_with_unknown_email_is_unauthorized() {
    let ctx = context();
    let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &ctx.state))).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "email": "nobody@example.com",
            "password": "SecurePass123!"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn profile_requires_token() {
    let ctx = context();
    let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &ctx.state))).await;

    let req = test::TestRequest::get().uri("/api/users/me").to_request();
    let err = test::try_call_service(&app, req).await.unwrap_err();
    assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn health_reports_ok() {
    let ctx = context();
    let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &ctx.state))).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Backend running");
}

#[actix_web::test]
async fn unknown_route_returns_json_not_found() {
    let ctx = context();
    let app = test::init_service(App::new().configure(|cfg| routes::configure(cfg, &ctx.state))).await;

    let req = test::TestRequest::get().uri("/api/comments").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["message"], "Route not found");
    assert_eq!(error["status"], 404);
}
