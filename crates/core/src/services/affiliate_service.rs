pub use crate::app_state::AppState;
use crate::repositories::affiliate_repository::AffiliateRepository;
use crate::repositories::commission_repository::CommissionRepository;
use crate::repositories::payout_repository::PayoutRepository;
use crate::repositories::referral_repository::ReferralRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::audit_service::AuditService;
use chrono::Utc;
use diesel::prelude::*;
pub use icetracer_primitives::{
    error::ApiError,
    models::{
        dtos::affiliate_dto::{
            AccountStatusResponse, AffiliateResponse, AffiliateStatsResponse,
            OnboardingLinkResponse, UpdateProfileRequest,
        },
        dtos::payout_dto::{CommissionResponse, PayoutLogResponse},
        entities::affiliate::{Affiliate, AffiliateProfileChanges},
        ReferralStatus,
    },
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

pub struct AffiliateService;

impl AffiliateService {
    pub fn profile(state: &AppState, user_id: Uuid) -> Result<AffiliateResponse, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let affiliate = Self::require_affiliate(&mut conn, user_id)?;
        Ok(AffiliateResponse::from(&affiliate))
    }

    pub fn update_profile(
        state: &AppState,
        user_id: Uuid,
        req: &UpdateProfileRequest,
    ) -> Result<AffiliateResponse, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let affiliate = Self::require_affiliate(&mut conn, user_id)?;

        let updated = AffiliateRepository::update_profile(
            &mut conn,
            affiliate.id,
            AffiliateProfileChanges {
                slug: req.slug.as_deref(),
                company_name: req.company_name.as_deref(),
                website: req.website.as_deref(),
                updated_at: Utc::now(),
            },
        )?;

        Ok(AffiliateResponse::from(&updated))
    }

    pub fn stats(state: &AppState, user_id: Uuid) -> Result<AffiliateStatsResponse, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let affiliate = Self::require_affiliate(&mut conn, user_id)?;

        Ok(AffiliateStatsResponse {
            total_earned: affiliate.total_earned,
            unpaid_balance: affiliate.unpaid_balance,
            referrals_pending: ReferralRepository::count_by_status(
                &mut conn,
                affiliate.id,
                ReferralStatus::Pending,
            )?,
            referrals_converted: ReferralRepository::count_by_status(
                &mut conn,
                affiliate.id,
                ReferralStatus::Converted,
            )?,
            referrals_lost: ReferralRepository::count_by_status(
                &mut conn,
                affiliate.id,
                ReferralStatus::Lost,
            )?,
            last_payout_at: affiliate.last_payout_at,
            last_payout_amount: affiliate.last_payout_amount,
        })
    }

    pub fn commissions(
        state: &AppState,
        user_id: Uuid,
    ) -> Result<Vec<CommissionResponse>, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let affiliate = Self::require_affiliate(&mut conn, user_id)?;
        let logs = CommissionRepository::list_for_affiliate(&mut conn, affiliate.id)?;
        Ok(logs.iter().map(CommissionResponse::from).collect())
    }

    pub fn payouts(state: &AppState, user_id: Uuid) -> Result<Vec<PayoutLogResponse>, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let affiliate = Self::require_affiliate(&mut conn, user_id)?;
        let logs = PayoutRepository::list_for_affiliate(&mut conn, affiliate.id)?;
        Ok(logs.iter().map(PayoutLogResponse::from).collect())
    }

    /// Creates the Express account on first call, then hands back a fresh
    /// onboarding link either way.
    pub async fn onboard(
        state: &AppState,
        user_id: Uuid,
    ) -> Result<OnboardingLinkResponse, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let affiliate = Self::require_affiliate(&mut conn, user_id)?;

        let account_id = match affiliate.stripe_account_id.clone() {
            Some(id) => id,
            None => {
                let user = UserRepository::find_by_id(&mut conn, user_id)?
                    .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

                let account = state.stripe.create_express_account(&user.email).await?;
                AffiliateRepository::set_stripe_account(&mut conn, affiliate.id, &account.id)?;

                info!(affiliate_id = %affiliate.id, account_id = %account.id, "Stripe account created");
                account.id
            }
        };

        let refresh_url = format!("{}/affiliate/onboarding/refresh", state.config.app_url);
        let return_url = format!("{}/affiliate/onboarding/complete", state.config.app_url);

        let link = state
            .stripe
            .create_account_link(&account_id, &refresh_url, &return_url)
            .await?;

        Ok(OnboardingLinkResponse { url: link.url })
    }

    /// Pulls the current account capabilities from Stripe and caches them
    /// on the affiliate row.
    pub async fn account_status(
        state: &AppState,
        user_id: Uuid,
    ) -> Result<AccountStatusResponse, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let affiliate = Self::require_affiliate(&mut conn, user_id)?;

        let Some(account_id) = affiliate.stripe_account_id.clone() else {
            return Ok(AccountStatusResponse {
                stripe_account_id: None,
                payouts_enabled: false,
                details_submitted: false,
            });
        };

        let account = state.stripe.retrieve_account(&account_id).await?;

        AffiliateRepository::set_account_status(
            &mut conn,
            affiliate.id,
            account.payouts_enabled,
            account.details_submitted,
        )?;

        Ok(AccountStatusResponse {
            stripe_account_id: Some(account_id),
            payouts_enabled: account.payouts_enabled,
            details_submitted: account.details_submitted,
        })
    }

    pub fn list_all(state: &AppState) -> Result<Vec<AffiliateResponse>, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let affiliates = AffiliateRepository::list_all(&mut conn)?;
        Ok(affiliates.iter().map(AffiliateResponse::from).collect())
    }

    pub fn find_by_id(state: &AppState, affiliate_id: Uuid) -> Result<AffiliateResponse, ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let affiliate = AffiliateRepository::find_by_id(&mut conn, affiliate_id)?
            .ok_or_else(|| ApiError::NotFound("Affiliate not found".into()))?;
        Ok(AffiliateResponse::from(&affiliate))
    }

    /// Admin cascade delete: ledger rows first, then the affiliate itself.
    pub async fn delete(
        state: &AppState,
        admin_id: Uuid,
        affiliate_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        conn.transaction::<_, ApiError, _>(|conn| {
            AffiliateRepository::find_by_id_with_lock(conn, affiliate_id)?;

            CommissionRepository::delete_by_affiliate(conn, affiliate_id)?;
            PayoutRepository::delete_by_affiliate(conn, affiliate_id)?;
            ReferralRepository::delete_by_affiliate(conn, affiliate_id)?;
            AffiliateRepository::delete(conn, affiliate_id)?;

            Ok(())
        })?;

        let _ = AuditService::log_event(
            state,
            Some(admin_id),
            "affiliate.deleted",
            Some("affiliate"),
            Some(&affiliate_id.to_string()),
            json!({}),
            None,
        )
        .await;

        Ok(())
    }

    fn require_affiliate(
        conn: &mut diesel::PgConnection,
        user_id: Uuid,
    ) -> Result<Affiliate, ApiError> {
        AffiliateRepository::find_by_user(conn, user_id)?
            .ok_or_else(|| ApiError::NotFound("No affiliate profile for this user".into()))
    }
}
