use diesel::prelude::*;
use icetracer_core::services::payout_service::PayoutService;
use icetracer_primitives::error::ApiError;
use icetracer_primitives::models::dtos::payout_dto::PayoutRequest;
use icetracer_primitives::models::{PayoutStatus, UserRole};
use icetracer_primitives::schema::{commission_logs, payout_logs};
use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::fixtures;

#[tokio::test]
#[serial]
async fn payout_clears_full_unpaid_balance() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/transfers"))
        .and(body_string_contains("amount=4500"))
        .and(body_string_contains("currency=usd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "tr_test_success",
            "amount": 4500
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = common::create_test_app_state_with_stripe(&mock_server.uri());
    let conn = &mut state.db.get().unwrap();

    let admin = fixtures::insert_user(conn, UserRole::Admin);
    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_payable_affiliate(conn, user.id);

    fixtures::insert_commission(conn, affiliate.id, 1000, false);
    fixtures::insert_commission(conn, affiliate.id, 1500, false);
    fixtures::insert_commission(conn, affiliate.id, 2000, false);
    // Already-settled history must not be touched or re-counted.
    fixtures::insert_commission(conn, affiliate.id, 700, true);

    let res = PayoutService::process_payout(
        &state,
        admin.id,
        affiliate.id,
        PayoutRequest {
            amount: 4500,
            notes: Some("August payout".into()),
        },
    )
    .await
    .expect("payout should succeed");

    assert_eq!(res.amount, 4500);
    assert_eq!(res.stripe_transfer_id, "tr_test_success");

    let updated = fixtures::load_affiliate(conn, affiliate.id);
    assert_eq!(updated.total_earned, 4500);
    assert_eq!(updated.unpaid_balance, 0);
    assert_eq!(updated.last_payout_amount, Some(4500));
    assert!(updated.last_payout_at.is_some());

    let unpaid_left: i64 = commission_logs::table
        .filter(commission_logs::affiliate_id.eq(affiliate.id))
        .filter(commission_logs::is_paid.eq(false))
        .count()
        .get_result(conn)
        .unwrap();
    assert_eq!(unpaid_left, 0);

    let (transfer_id, status, amount): (String, PayoutStatus, i64) = payout_logs::table
        .filter(payout_logs::affiliate_id.eq(affiliate.id))
        .select((
            payout_logs::stripe_transfer_id,
            payout_logs::status,
            payout_logs::amount,
        ))
        .first(conn)
        .unwrap();
    assert_eq!(transfer_id, "tr_test_success");
    assert_eq!(status, PayoutStatus::Paid);
    assert_eq!(amount, 4500);
}

#[tokio::test]
#[serial]
async fn payout_amount_mismatch_is_rejected_before_stripe() {
    let mock_server = MockServer::start().await;

    // No transfer request may reach Stripe on a mismatch.
    Mock::given(method("POST"))
        .and(path("/v1/transfers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "tr_should_not_happen",
            "amount": 4000
        })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let state = common::create_test_app_state_with_stripe(&mock_server.uri());
    let conn = &mut state.db.get().unwrap();

    let admin = fixtures::insert_user(conn, UserRole::Admin);
    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_payable_affiliate(conn, user.id);

    fixtures::insert_commission(conn, affiliate.id, 1000, false);
    fixtures::insert_commission(conn, affiliate.id, 1500, false);
    fixtures::insert_commission(conn, affiliate.id, 2000, false);

    let err = PayoutService::process_payout(
        &state,
        admin.id,
        affiliate.id,
        PayoutRequest {
            amount: 4000,
            notes: None,
        },
    )
    .await
    .expect_err("mismatched amount must be rejected");

    assert!(matches!(err, ApiError::Precondition(_)), "got {err:?}");

    // Zero mutations: balance intact, nothing marked paid, no payout row.
    let untouched = fixtures::load_affiliate(conn, affiliate.id);
    assert_eq!(untouched.unpaid_balance, 4500);
    assert_eq!(untouched.total_earned, 0);

    let unpaid: i64 = commission_logs::table
        .filter(commission_logs::affiliate_id.eq(affiliate.id))
        .filter(commission_logs::is_paid.eq(false))
        .count()
        .get_result(conn)
        .unwrap();
    assert_eq!(unpaid, 3);

    let payouts: i64 = payout_logs::table
        .filter(payout_logs::affiliate_id.eq(affiliate.id))
        .count()
        .get_result(conn)
        .unwrap();
    assert_eq!(payouts, 0);
}

#[tokio::test]
#[serial]
async fn payout_requires_payable_stripe_account() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let admin = fixtures::insert_user(conn, UserRole::Admin);
    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    // No Stripe account at all.
    let affiliate = fixtures::insert_affiliate(conn, user.id);
    fixtures::insert_commission(conn, affiliate.id, 1200, false);

    let err = PayoutService::process_payout(
        &state,
        admin.id,
        affiliate.id,
        PayoutRequest {
            amount: 1200,
            notes: None,
        },
    )
    .await
    .expect_err("affiliate without a Stripe account cannot be paid");

    assert!(matches!(err, ApiError::Precondition(_)), "got {err:?}");
    assert_eq!(fixtures::load_affiliate(conn, affiliate.id).unpaid_balance, 1200);
}

#[tokio::test]
#[serial]
async fn payout_with_nothing_unpaid_is_rejected() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let admin = fixtures::insert_user(conn, UserRole::Admin);
    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_payable_affiliate(conn, user.id);
    // History exists but everything is settled.
    fixtures::insert_commission(conn, affiliate.id, 900, true);

    let err = PayoutService::process_payout(
        &state,
        admin.id,
        affiliate.id,
        PayoutRequest {
            amount: 900,
            notes: None,
        },
    )
    .await
    .expect_err("nothing unpaid means nothing to pay");

    assert!(matches!(err, ApiError::Precondition(_)), "got {err:?}");
}

#[tokio::test]
#[serial]
async fn stripe_rejection_leaves_ledger_untouched() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/transfers"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "Insufficient platform balance" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = common::create_test_app_state_with_stripe(&mock_server.uri());
    let conn = &mut state.db.get().unwrap();

    let admin = fixtures::insert_user(conn, UserRole::Admin);
    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_payable_affiliate(conn, user.id);
    fixtures::insert_commission(conn, affiliate.id, 2500, false);

    let err = PayoutService::process_payout(
        &state,
        admin.id,
        affiliate.id,
        PayoutRequest {
            amount: 2500,
            notes: None,
        },
    )
    .await
    .expect_err("provider rejection must fail the payout");

    match err {
        ApiError::Payment(msg) => assert!(msg.contains("Insufficient"), "got {msg}"),
        other => panic!("expected Payment error, got {other:?}"),
    }

    let untouched = fixtures::load_affiliate(conn, affiliate.id);
    assert_eq!(untouched.unpaid_balance, 2500);
    assert_eq!(untouched.total_earned, 0);

    let payouts: i64 = payout_logs::table
        .filter(payout_logs::affiliate_id.eq(affiliate.id))
        .count()
        .get_result(conn)
        .unwrap();
    assert_eq!(payouts, 0);
}

#[tokio::test]
#[serial]
async fn failed_ledger_write_reports_the_transfer_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/transfers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "tr_test_collision",
            "amount": 3200
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = common::create_test_app_state_with_stripe(&mock_server.uri());
    let conn = &mut state.db.get().unwrap();

    let admin = fixtures::insert_user(conn, UserRole::Admin);
    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_payable_affiliate(conn, user.id);
    fixtures::insert_commission(conn, affiliate.id, 3200, false);

    // Occupy the transfer id Stripe will hand back, so the ledger insert
    // collides after the transfer has already gone through.
    let other_user = fixtures::insert_user(conn, UserRole::Affiliate);
    let other = fixtures::insert_payable_affiliate(conn, other_user.id);
    fixtures::insert_payout_log(conn, other.id, "tr_test_collision", 1);

    let err = PayoutService::process_payout(
        &state,
        admin.id,
        affiliate.id,
        PayoutRequest {
            amount: 3200,
            notes: None,
        },
    )
    .await
    .expect_err("ledger write must fail");

    match err {
        ApiError::PayoutUnrecorded { transfer_id, .. } => {
            assert_eq!(transfer_id, "tr_test_collision");
        }
        other => panic!("expected PayoutUnrecorded, got {other:?}"),
    }

    // The transaction rolled back: commissions stay unpaid, balance stays
    // put, and no payout row exists for this affiliate.
    let untouched = fixtures::load_affiliate(conn, affiliate.id);
    assert_eq!(untouched.unpaid_balance, 3200);
    assert_eq!(untouched.total_earned, 0);

    let unpaid: i64 = commission_logs::table
        .filter(commission_logs::affiliate_id.eq(affiliate.id))
        .filter(commission_logs::is_paid.eq(false))
        .count()
        .get_result(conn)
        .unwrap();
    assert_eq!(unpaid, 1);

    let payouts: i64 = payout_logs::table
        .filter(payout_logs::affiliate_id.eq(affiliate.id))
        .count()
        .get_result(conn)
        .unwrap();
    assert_eq!(payouts, 0);
}

#[tokio::test]
#[serial]
async fn payout_for_unknown_affiliate_is_not_found() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();
    let admin = fixtures::insert_user(conn, UserRole::Admin);

    let err = PayoutService::process_payout(
        &state,
        admin.id,
        uuid::Uuid::new_v4(),
        PayoutRequest {
            amount: 100,
            notes: None,
        },
    )
    .await
    .expect_err("unknown affiliate");

    assert!(matches!(err, ApiError::NotFound(_)), "got {err:?}");
}
