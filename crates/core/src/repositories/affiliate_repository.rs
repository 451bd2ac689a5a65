use chrono::Utc;
use diesel::prelude::*;
use icetracer_primitives::error::ApiError;
use icetracer_primitives::models::entities::affiliate::{
    Affiliate, AffiliateProfileChanges, NewAffiliate,
};
use icetracer_primitives::schema::affiliates;
use uuid::Uuid;

pub struct AffiliateRepository;

impl AffiliateRepository {
    pub fn find_by_id(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
    ) -> Result<Option<Affiliate>, ApiError> {
        affiliates::table
            .find(affiliate_id)
            .first::<Affiliate>(conn)
            .optional()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn find_by_id_with_lock(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
    ) -> Result<Affiliate, ApiError> {
        affiliates::table
            .find(affiliate_id)
            .for_update()
            .first::<Affiliate>(conn)
            .map_err(|e| {
                if matches!(e, diesel::result::Error::NotFound) {
                    ApiError::NotFound("Affiliate not found".into())
                } else {
                    ApiError::DatabaseConnection(e.to_string())
                }
            })
    }

    pub fn find_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Option<Affiliate>, ApiError> {
        affiliates::table
            .filter(affiliates::user_id.eq(user_id))
            .first::<Affiliate>(conn)
            .optional()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn find_by_slug(
        conn: &mut PgConnection,
        slug: &str,
    ) -> Result<Option<Affiliate>, ApiError> {
        affiliates::table
            .filter(affiliates::slug.eq(slug))
            .first::<Affiliate>(conn)
            .optional()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<Affiliate>, ApiError> {
        affiliates::table
            .order(affiliates::created_at.desc())
            .load::<Affiliate>(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn create(conn: &mut PgConnection, new_affiliate: NewAffiliate) -> Result<Affiliate, ApiError> {
        diesel::insert_into(affiliates::table)
            .values(&new_affiliate)
            .get_result::<Affiliate>(conn)
            .map_err(|e| Self::map_unique(e, "An affiliate with that slug already exists"))
    }

    pub fn update_profile(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
        changes: AffiliateProfileChanges,
    ) -> Result<Affiliate, ApiError> {
        diesel::update(affiliates::table.find(affiliate_id))
            .set(&changes)
            .get_result::<Affiliate>(conn)
            .map_err(|e| Self::map_unique(e, "An affiliate with that slug already exists"))
    }

    pub fn set_stripe_account(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
        account_id: &str,
    ) -> Result<(), ApiError> {
        diesel::update(affiliates::table.find(affiliate_id))
            .set((
                affiliates::stripe_account_id.eq(account_id),
                affiliates::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;
        Ok(())
    }

    pub fn set_account_status(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
        payouts_enabled: bool,
        details_submitted: bool,
    ) -> Result<(), ApiError> {
        diesel::update(affiliates::table.find(affiliate_id))
            .set((
                affiliates::payouts_enabled.eq(payouts_enabled),
                affiliates::details_submitted.eq(details_submitted),
                affiliates::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;
        Ok(())
    }

    /// Moves `amount` from the unpaid side of the ledger to the earned side
    /// and stamps the last-payout fields. Call inside the payout transaction.
    pub fn apply_payout(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
        amount: i64,
    ) -> Result<(), ApiError> {
        diesel::update(affiliates::table.find(affiliate_id))
            .set((
                affiliates::total_earned.eq(affiliates::total_earned + amount),
                affiliates::unpaid_balance.eq(affiliates::unpaid_balance - amount),
                affiliates::last_payout_at.eq(Utc::now()),
                affiliates::last_payout_amount.eq(amount),
                affiliates::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;
        Ok(())
    }

    pub fn add_unpaid_balance(
        conn: &mut PgConnection,
        affiliate_id: Uuid,
        amount: i64,
    ) -> Result<(), ApiError> {
        diesel::update(affiliates::table.find(affiliate_id))
            .set((
                affiliates::unpaid_balance.eq(affiliates::unpaid_balance + amount),
                affiliates::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;
        Ok(())
    }

    pub fn delete(conn: &mut PgConnection, affiliate_id: Uuid) -> Result<usize, ApiError> {
        diesel::delete(affiliates::table.find(affiliate_id))
            .execute(conn)
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    pub fn slug_exists(conn: &mut PgConnection, slug: &str) -> Result<bool, ApiError> {
        affiliates::table
            .filter(affiliates::slug.eq(slug))
            .select(affiliates::id)
            .first::<Uuid>(conn)
            .optional()
            .map(|res| res.is_some())
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }

    fn map_unique(e: diesel::result::Error, msg: &str) -> ApiError {
        if matches!(
            e,
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _
            )
        ) {
            ApiError::Precondition(msg.to_string())
        } else {
            ApiError::DatabaseConnection(e.to_string())
        }
    }
}
