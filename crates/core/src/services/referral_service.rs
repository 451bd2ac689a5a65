pub use crate::app_state::AppState;
use crate::repositories::affiliate_repository::AffiliateRepository;
use crate::repositories::commission_repository::CommissionRepository;
use crate::repositories::referral_repository::ReferralRepository;
use diesel::prelude::*;
pub use icetracer_primitives::{
    error::ApiError,
    models::{
        dtos::referral_dto::{ConvertReferralRequest, ReferralResponse, TrackReferralRequest},
        entities::{commission_log::NewCommissionLog, referral::NewReferral},
        ReferralStatus,
    },
};
use tracing::info;
use uuid::Uuid;

pub struct ReferralService;

impl ReferralService {
    /// Records a signup attributed to an affiliate's tracking link.
    pub fn track(
        state: &AppState,
        slug: &str,
        req: &TrackReferralRequest,
    ) -> Result<ReferralResponse, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let affiliate = AffiliateRepository::find_by_slug(&mut conn, slug)?
            .ok_or_else(|| ApiError::NotFound("Unknown tracking link".into()))?;

        let referral = ReferralRepository::create(
            &mut conn,
            NewReferral {
                affiliate_id: affiliate.id,
                status: ReferralStatus::Pending,
                landing_page: req.landing_page.as_deref(),
                referred_email: req.referred_email.as_deref(),
            },
        )?;

        info!(affiliate_id = %affiliate.id, referral_id = %referral.id, "Referral tracked");

        Ok(ReferralResponse::from(&referral))
    }

    /// Converts a pending referral: flips status, writes the unpaid
    /// commission row, and bumps the affiliate's unpaid balance, all in one
    /// transaction so the ledger invariant holds.
    pub fn convert(
        state: &AppState,
        referral_id: Uuid,
        req: &ConvertReferralRequest,
    ) -> Result<ReferralResponse, ApiError> {
        if req.amount <= 0 {
            return Err(ApiError::Precondition("Commission amount must be positive".into()));
        }

        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let referral = conn.transaction::<_, ApiError, _>(|conn| {
            let referral = ReferralRepository::find_by_id_with_lock(conn, referral_id)?;

            if referral.status != ReferralStatus::Pending {
                return Err(ApiError::Precondition(format!(
                    "Referral is already {}",
                    referral.status
                )));
            }

            let referral = ReferralRepository::set_status(
                conn,
                referral_id,
                ReferralStatus::Converted,
            )?;

            CommissionRepository::create(
                conn,
                NewCommissionLog {
                    affiliate_id: referral.affiliate_id,
                    referral_id,
                    amount: req.amount,
                },
            )?;

            AffiliateRepository::add_unpaid_balance(conn, referral.affiliate_id, req.amount)?;

            Ok(referral)
        })?;

        info!(
            referral_id = %referral_id,
            affiliate_id = %referral.affiliate_id,
            amount = req.amount,
            "Referral converted"
        );

        Ok(ReferralResponse::from(&referral))
    }

    pub fn mark_lost(state: &AppState, referral_id: Uuid) -> Result<ReferralResponse, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let referral = conn.transaction::<_, ApiError, _>(|conn| {
            let referral = ReferralRepository::find_by_id_with_lock(conn, referral_id)?;

            if referral.status != ReferralStatus::Pending {
                return Err(ApiError::Precondition(format!(
                    "Referral is already {}",
                    referral.status
                )));
            }

            ReferralRepository::set_status(conn, referral_id, ReferralStatus::Lost)
        })?;

        Ok(ReferralResponse::from(&referral))
    }
}
