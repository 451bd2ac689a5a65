use diesel::prelude::*;
use icetracer_core::services::referral_service::ReferralService;
use icetracer_primitives::error::ApiError;
use icetracer_primitives::models::dtos::referral_dto::{
    ConvertReferralRequest, TrackReferralRequest,
};
use icetracer_primitives::models::{ReferralStatus, UserRole};
use icetracer_primitives::schema::commission_logs;
use serial_test::serial;

mod common;

use common::fixtures;

#[tokio::test]
#[serial]
async fn tracking_creates_pending_referral() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_affiliate(conn, user.id);

    let res = ReferralService::track(
        &state,
        &affiliate.slug,
        &TrackReferralRequest {
            landing_page: Some("/pricing".into()),
            referred_email: None,
        },
    )
    .expect("tracking should succeed");

    assert_eq!(res.affiliate_id, affiliate.id);
    assert_eq!(res.status, ReferralStatus::Pending);
    assert_eq!(res.landing_page.as_deref(), Some("/pricing"));
}

#[tokio::test]
#[serial]
async fn tracking_unknown_slug_is_not_found() {
    let state = common::create_test_app_state();

    let err = ReferralService::track(
        &state,
        "no-such-partner",
        &TrackReferralRequest {
            landing_page: None,
            referred_email: None,
        },
    )
    .expect_err("unknown slug");

    assert!(matches!(err, ApiError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
#[serial]
async fn converting_credits_commission_and_balance_together() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_affiliate(conn, user.id);
    let referral_id = fixtures::insert_referral(conn, affiliate.id, ReferralStatus::Pending);

    let res = ReferralService::convert(
        &state,
        referral_id,
        &ConvertReferralRequest { amount: 2500 },
    )
    .expect("conversion should succeed");

    assert_eq!(res.status, ReferralStatus::Converted);

    // Ledger invariant: unpaid balance equals the sum of unpaid commissions.
    let updated = fixtures::load_affiliate(conn, affiliate.id);
    assert_eq!(updated.unpaid_balance, 2500);

    let (amount, is_paid): (i64, bool) = commission_logs::table
        .filter(commission_logs::referral_id.eq(referral_id))
        .select((commission_logs::amount, commission_logs::is_paid))
        .first(conn)
        .unwrap();
    assert_eq!(amount, 2500);
    assert!(!is_paid);
}

#[tokio::test]
#[serial]
async fn converting_a_settled_referral_is_rejected() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_affiliate(conn, user.id);
    let referral_id = fixtures::insert_referral(conn, affiliate.id, ReferralStatus::Lost);

    let err = ReferralService::convert(
        &state,
        referral_id,
        &ConvertReferralRequest { amount: 1000 },
    )
    .expect_err("lost referral cannot convert");

    assert!(matches!(err, ApiError::Precondition(_)), "got {err:?}");

    // No commission row appeared and the balance stayed put.
    let commissions: i64 = commission_logs::table
        .filter(commission_logs::referral_id.eq(referral_id))
        .count()
        .get_result(conn)
        .unwrap();
    assert_eq!(commissions, 0);
    assert_eq!(fixtures::load_affiliate(conn, affiliate.id).unpaid_balance, 0);
}

#[tokio::test]
#[serial]
async fn non_positive_commission_is_rejected() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_affiliate(conn, user.id);
    let referral_id = fixtures::insert_referral(conn, affiliate.id, ReferralStatus::Pending);

    let err = ReferralService::convert(&state, referral_id, &ConvertReferralRequest { amount: 0 })
        .expect_err("zero commission");

    assert!(matches!(err, ApiError::Precondition(_)), "got {err:?}");
}

#[tokio::test]
#[serial]
async fn marking_lost_only_works_on_pending() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let user = fixtures::insert_user(conn, UserRole::Affiliate);
    let affiliate = fixtures::insert_affiliate(conn, user.id);

    let pending = fixtures::insert_referral(conn, affiliate.id, ReferralStatus::Pending);
    let res = ReferralService::mark_lost(&state, pending).expect("pending can be lost");
    assert_eq!(res.status, ReferralStatus::Lost);

    let converted = fixtures::insert_referral(conn, affiliate.id, ReferralStatus::Converted);
    let err = ReferralService::mark_lost(&state, converted).expect_err("converted stays converted");
    assert!(matches!(err, ApiError::Precondition(_)), "got {err:?}");
}
