use axum::http::StatusCode;
use axum_test::TestServer;
use icetracer_core::SecurityConfig;
use icetracer_primitives::models::UserRole;
use serial_test::serial;

mod common;

use common::fixtures;

#[tokio::test]
#[serial]
async fn regular_user_cannot_reach_admin_routes() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();
    let user = fixtures::insert_user(conn, UserRole::User);
    let token = SecurityConfig::create_token(&state, &user).unwrap();

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .get("/api/admin/users")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn affiliate_cannot_reach_admin_routes() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();
    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    fixtures::insert_affiliate(conn, user.id);
    let token = SecurityConfig::create_token(&state, &user).unwrap();

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .get("/api/admin/affiliates")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn admin_reaches_admin_routes() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();
    let admin = fixtures::insert_user(conn, UserRole::Admin);
    let token = SecurityConfig::create_token(&state, &admin).unwrap();

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .get("/api/admin/users")
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
}

#[tokio::test]
#[serial]
async fn admin_passes_the_affiliate_gate() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();
    let admin = fixtures::insert_user(conn, UserRole::Admin);
    let token = SecurityConfig::create_token(&state, &admin).unwrap();

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    // The gate lets the admin through; 404 (no affiliate account) proves the
    // request reached the handler instead of dying at the role check.
    let response = server
        .get("/api/affiliate/profile")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn affiliate_reaches_their_portal() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();
    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_affiliate(conn, user.id);
    let token = SecurityConfig::create_token(&state, &user).unwrap();

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .get("/api/affiliate/profile")
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["slug"], affiliate.slug.as_str());
}

#[tokio::test]
#[serial]
async fn regular_user_cannot_reach_affiliate_routes() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();
    let user = fixtures::insert_user(conn, UserRole::User);
    let token = SecurityConfig::create_token(&state, &user).unwrap();

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .get("/api/affiliate/stats")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn protected_routes_require_a_token() {
    let state = common::create_test_app_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    server
        .get("/api/admin/users")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .get("/api/affiliate/profile")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
