use diesel::prelude::*;
use icetracer_core::services::affiliate_service::AffiliateService;
use icetracer_primitives::error::ApiError;
use icetracer_primitives::models::dtos::affiliate_dto::UpdateProfileRequest;
use icetracer_primitives::models::{ReferralStatus, UserRole};
use icetracer_primitives::schema::affiliates;
use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::fixtures;

#[tokio::test]
#[serial]
async fn stats_reflect_ledger_and_referral_counts() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_affiliate(conn, user.id);

    fixtures::insert_referral(conn, affiliate.id, ReferralStatus::Pending);
    fixtures::insert_referral(conn, affiliate.id, ReferralStatus::Pending);
    fixtures::insert_referral(conn, affiliate.id, ReferralStatus::Lost);
    // insert_commission adds a converted referral per row.
    fixtures::insert_commission(conn, affiliate.id, 1000, false);
    fixtures::insert_commission(conn, affiliate.id, 500, true);

    let stats = AffiliateService::stats(&state, user.id).expect("stats should load");

    assert_eq!(stats.unpaid_balance, 1000);
    assert_eq!(stats.referrals_pending, 2);
    assert_eq!(stats.referrals_converted, 2);
    assert_eq!(stats.referrals_lost, 1);
}

#[tokio::test]
#[serial]
async fn profile_update_rejects_taken_slug() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let user_a = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate_a = fixtures::insert_affiliate(conn, user_a.id);
    let user_b = fixtures::insert_user(conn, UserRole::Affiliate);
    fixtures::insert_affiliate(conn, user_b.id);

    let err = AffiliateService::update_profile(
        &state,
        user_b.id,
        &UpdateProfileRequest {
            slug: Some(affiliate_a.slug.clone()),
            company_name: None,
            website: None,
        },
    )
    .expect_err("slug collision must be rejected");

    assert!(matches!(err, ApiError::Precondition(_)), "got {err:?}");
}

#[tokio::test]
#[serial]
async fn onboarding_creates_the_account_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "acct_onboard_test",
            "payouts_enabled": false,
            "details_submitted": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/account_links"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://connect.stripe.com/setup/s/test"
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let state = common::create_test_app_state_with_stripe(&mock_server.uri());
    let conn = &mut state.db.get().unwrap();

    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_affiliate(conn, user.id);

    let link = AffiliateService::onboard(&state, user.id)
        .await
        .expect("first onboarding call");
    assert_eq!(link.url, "https://connect.stripe.com/setup/s/test");

    let stored: Option<String> = affiliates::table
        .find(affiliate.id)
        .select(affiliates::stripe_account_id)
        .first(conn)
        .unwrap();
    assert_eq!(stored.as_deref(), Some("acct_onboard_test"));

    // Second call reuses the stored account and only mints a new link.
    AffiliateService::onboard(&state, user.id)
        .await
        .expect("second onboarding call");
}

#[tokio::test]
#[serial]
async fn account_status_is_cached_on_the_affiliate_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/v1/accounts/acct_[a-z0-9_]+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "acct_status_test",
            "payouts_enabled": true,
            "details_submitted": true
        })))
        .mount(&mock_server)
        .await;

    let state = common::create_test_app_state_with_stripe(&mock_server.uri());
    let conn = &mut state.db.get().unwrap();

    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_affiliate(conn, user.id);
    diesel::update(affiliates::table.find(affiliate.id))
        .set(affiliates::stripe_account_id.eq("acct_status_test"))
        .execute(conn)
        .unwrap();

    let status = AffiliateService::account_status(&state, user.id)
        .await
        .expect("status refresh");
    assert!(status.payouts_enabled);
    assert!(status.details_submitted);

    let (enabled, submitted): (bool, bool) = affiliates::table
        .find(affiliate.id)
        .select((affiliates::payouts_enabled, affiliates::details_submitted))
        .first(conn)
        .unwrap();
    assert!(enabled);
    assert!(submitted);
}

#[tokio::test]
#[serial]
async fn status_without_account_reports_not_connected() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    fixtures::insert_affiliate(conn, user.id);

    let status = AffiliateService::account_status(&state, user.id)
        .await
        .expect("no Stripe call needed");
    assert!(status.stripe_account_id.is_none());
    assert!(!status.payouts_enabled);
}
