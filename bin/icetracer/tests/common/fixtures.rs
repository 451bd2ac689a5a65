#![allow(dead_code)]

use diesel::prelude::*;
use icetracer_primitives::models::entities::affiliate::Affiliate;
use icetracer_primitives::models::entities::user::User;
use icetracer_primitives::models::{PayoutStatus, ReferralStatus, UserRole};
use icetracer_primitives::schema::{affiliates, commission_logs, payout_logs, referrals, users};
use uuid::Uuid;

/// Shared password for fixture users, hashed at cost 4 so fixtures stay fast.
pub const TEST_PASSWORD: &str = "SecurePass123!";

pub fn insert_user(conn: &mut PgConnection, role: UserRole) -> User {
    let email = format!("user_{}@example.com", Uuid::new_v4().simple());
    let password_hash =
        bcrypt::hash(TEST_PASSWORD, 4).expect("bcrypt hash failed");

    diesel::insert_into(users::table)
        .values((
            users::email.eq(&email),
            users::password_hash.eq(&password_hash),
            users::role.eq(role),
        ))
        .get_result::<User>(conn)
        .expect("Failed to insert test user")
}

pub fn insert_affiliate(conn: &mut PgConnection, user_id: Uuid) -> Affiliate {
    let slug = format!("partner-{}", &Uuid::new_v4().simple().to_string()[..8]);

    diesel::insert_into(affiliates::table)
        .values((affiliates::user_id.eq(user_id), affiliates::slug.eq(&slug)))
        .get_result::<Affiliate>(conn)
        .expect("Failed to insert test affiliate")
}

/// Affiliate ready for payouts: connected Stripe account, payouts enabled.
pub fn insert_payable_affiliate(conn: &mut PgConnection, user_id: Uuid) -> Affiliate {
    let affiliate = insert_affiliate(conn, user_id);

    diesel::update(affiliates::table.find(affiliate.id))
        .set((
            affiliates::stripe_account_id.eq(format!("acct_{}", Uuid::new_v4().simple())),
            affiliates::payouts_enabled.eq(true),
            affiliates::details_submitted.eq(true),
        ))
        .get_result::<Affiliate>(conn)
        .expect("Failed to enable payouts on test affiliate")
}

pub fn insert_referral(
    conn: &mut PgConnection,
    affiliate_id: Uuid,
    status: ReferralStatus,
) -> Uuid {
    diesel::insert_into(referrals::table)
        .values((
            referrals::affiliate_id.eq(affiliate_id),
            referrals::status.eq(status),
        ))
        .returning(referrals::id)
        .get_result::<Uuid>(conn)
        .expect("Failed to insert test referral")
}

/// Inserts a commission row and keeps the affiliate's unpaid balance in step
/// when the row is unpaid.
pub fn insert_commission(
    conn: &mut PgConnection,
    affiliate_id: Uuid,
    amount: i64,
    is_paid: bool,
) -> Uuid {
    let referral_id = insert_referral(conn, affiliate_id, ReferralStatus::Converted);

    let id = diesel::insert_into(commission_logs::table)
        .values((
            commission_logs::affiliate_id.eq(affiliate_id),
            commission_logs::referral_id.eq(referral_id),
            commission_logs::amount.eq(amount),
            commission_logs::is_paid.eq(is_paid),
        ))
        .returning(commission_logs::id)
        .get_result::<Uuid>(conn)
        .expect("Failed to insert test commission");

    if !is_paid {
        diesel::update(affiliates::table.find(affiliate_id))
            .set(affiliates::unpaid_balance.eq(affiliates::unpaid_balance + amount))
            .execute(conn)
            .expect("Failed to bump unpaid balance");
    }

    id
}

pub fn insert_payout_log(
    conn: &mut PgConnection,
    affiliate_id: Uuid,
    transfer_id: &str,
    amount: i64,
) -> Uuid {
    diesel::insert_into(payout_logs::table)
        .values((
            payout_logs::affiliate_id.eq(affiliate_id),
            payout_logs::stripe_transfer_id.eq(transfer_id),
            payout_logs::amount.eq(amount),
            payout_logs::status.eq(PayoutStatus::Paid),
        ))
        .returning(payout_logs::id)
        .get_result::<Uuid>(conn)
        .expect("Failed to insert test payout log")
}

pub fn load_affiliate(conn: &mut PgConnection, affiliate_id: Uuid) -> Affiliate {
    affiliates::table
        .find(affiliate_id)
        .first::<Affiliate>(conn)
        .expect("Affiliate missing")
}
