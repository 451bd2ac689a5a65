use axum::http::StatusCode;
use axum_test::TestServer;
use icetracer_core::SecurityConfig;
use icetracer_primitives::models::UserRole;
use serde_json::json;
use serial_test::serial;
use uuid::Uuid;

mod common;

use common::fixtures;

fn admin_server() -> (TestServer, String) {
    let state = common::create_test_app_state();
    let mut conn = state.db.get().unwrap();
    let admin = fixtures::insert_user(&mut conn, UserRole::Admin);
    let token = SecurityConfig::create_token(&state, &admin).unwrap();
    drop(conn);

    let server = TestServer::new(common::create_test_app(state)).unwrap();
    (server, token)
}

#[tokio::test]
#[serial]
async fn duplicate_category_slug_is_rejected() {
    let (server, token) = admin_server();
    let slug = format!("cat-{}", Uuid::new_v4().simple());

    server
        .post("/api/admin/categories")
        .authorization_bearer(&token)
        .json(&json!({ "slug": slug, "name": "Medical IDs" }))
        .await
        .assert_status(StatusCode::CREATED);

    let second = server
        .post("/api/admin/categories")
        .authorization_bearer(&token)
        .json(&json!({ "slug": slug, "name": "Something Else" }))
        .await;
    second.assert_status(StatusCode::BAD_REQUEST);

    // Only the original row survives.
    let list = server.get("/api/categories").await;
    list.assert_status_ok();
    let body: serde_json::Value = list.json();
    let matching = body
        .as_array()
        .unwrap()
        .iter()
        .filter(|c| c["slug"] == slug.as_str())
        .count();
    assert_eq!(matching, 1);
}

#[tokio::test]
#[serial]
async fn only_published_posts_are_public() {
    let (server, token) = admin_server();
    let published_slug = format!("post-{}", Uuid::new_v4().simple());
    let draft_slug = format!("draft-{}", Uuid::new_v4().simple());

    server
        .post("/api/admin/posts")
        .authorization_bearer(&token)
        .json(&json!({
            "slug": published_slug,
            "title": "Why Carry Emergency Medical Info",
            "body": "Because first responders need it.",
            "published": true
        }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post("/api/admin/posts")
        .authorization_bearer(&token)
        .json(&json!({
            "slug": draft_slug,
            "title": "Unfinished Draft",
            "body": "wip",
            "published": false
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let public = server.get("/api/posts").await;
    public.assert_status_ok();
    let posts: serde_json::Value = public.json();
    let slugs: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert!(slugs.contains(&published_slug.as_str()));
    assert!(!slugs.contains(&draft_slug.as_str()));

    server
        .get(&format!("/api/posts/{published_slug}"))
        .await
        .assert_status_ok();
    server
        .get(&format!("/api/posts/{draft_slug}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    // The admin listing shows drafts too.
    let admin_list = server
        .get("/api/admin/posts")
        .authorization_bearer(&token)
        .await;
    admin_list.assert_status_ok();
    let all: serde_json::Value = admin_list.json();
    let all_slugs: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert!(all_slugs.contains(&draft_slug.as_str()));
}

#[tokio::test]
#[serial]
async fn duplicate_post_slug_is_rejected() {
    let (server, token) = admin_server();
    let slug = format!("dup-post-{}", Uuid::new_v4().simple());
    let payload = json!({
        "slug": slug,
        "title": "Original",
        "body": "text",
        "published": true
    });

    server
        .post("/api/admin/posts")
        .authorization_bearer(&token)
        .json(&payload)
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post("/api/admin/posts")
        .authorization_bearer(&token)
        .json(&payload)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn publishing_a_post_via_update_makes_it_public() {
    let (server, token) = admin_server();
    let slug = format!("upd-{}", Uuid::new_v4().simple());

    let created = server
        .post("/api/admin/posts")
        .authorization_bearer(&token)
        .json(&json!({
            "slug": slug,
            "title": "Hidden For Now",
            "body": "soon",
            "published": false
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let post: serde_json::Value = created.json();
    let post_id = post["id"].as_str().unwrap();

    server
        .get(&format!("/api/posts/{slug}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .put(&format!("/api/admin/posts/{post_id}"))
        .authorization_bearer(&token)
        .json(&json!({ "published": true }))
        .await
        .assert_status_ok();

    server
        .get(&format!("/api/posts/{slug}"))
        .await
        .assert_status_ok();
}

#[tokio::test]
#[serial]
async fn faq_visibility_follows_published_flag() {
    let (server, token) = admin_server();
    let question = format!("What is ICE? {}", Uuid::new_v4().simple());

    let created = server
        .post("/api/admin/faqs")
        .authorization_bearer(&token)
        .json(&json!({
            "question": question,
            "answer": "In Case of Emergency.",
            "position": 1,
            "published": false
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let faq: serde_json::Value = created.json();
    let faq_id = faq["id"].as_str().unwrap();

    let public: serde_json::Value = server.get("/api/faqs").await.json();
    assert!(!public
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f["question"] == question.as_str()));

    server
        .put(&format!("/api/admin/faqs/{faq_id}"))
        .authorization_bearer(&token)
        .json(&json!({ "published": true }))
        .await
        .assert_status_ok();

    let public: serde_json::Value = server.get("/api/faqs").await.json();
    assert!(public
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f["question"] == question.as_str()));
}
