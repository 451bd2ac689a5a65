pub use crate::app_state::AppState;
use crate::repositories::affiliate_repository::AffiliateRepository;
use crate::repositories::commission_repository::CommissionRepository;
use crate::repositories::payout_repository::PayoutRepository;
pub use crate::security::Claims;
use crate::services::audit_service::AuditService;
use diesel::prelude::*;
pub use icetracer_primitives::{
    error::ApiError,
    models::{
        dtos::payout_dto::{PayoutRequest, PayoutResponse},
        entities::payout_log::NewPayoutLog,
        PayoutStatus,
    },
};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

pub struct PayoutService;

impl PayoutService {
    /// Executes one payout for one affiliate.
    ///
    /// The requested amount must exactly equal the affiliate's unpaid
    /// commission total; the Stripe transfer happens only after that check,
    /// and every local write happens in one transaction after the transfer
    /// succeeds. A transaction failure after a successful transfer surfaces
    /// as `PayoutUnrecorded` so the operator can reconcile by transfer id.
    pub async fn process_payout(
        state: &AppState,
        admin_id: Uuid,
        affiliate_id: Uuid,
        req: PayoutRequest,
    ) -> Result<PayoutResponse, ApiError> {
        let amount = req.amount;
        if amount <= 0 {
            return Err(ApiError::Precondition("Payout amount must be positive".into()));
        }

        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let affiliate = AffiliateRepository::find_by_id(&mut conn, affiliate_id)?
            .ok_or_else(|| ApiError::NotFound("Affiliate not found".into()))?;

        let destination = affiliate
            .stripe_account_id
            .as_deref()
            .filter(|_| affiliate.payouts_enabled)
            .ok_or_else(|| {
                ApiError::Precondition(
                    "Affiliate has no payout-enabled Stripe account".into(),
                )
            })?;

        let unpaid_total = CommissionRepository::unpaid_total(&mut conn, affiliate_id)?;

        if unpaid_total == 0 {
            return Err(ApiError::Precondition("Affiliate has no unpaid commissions".into()));
        }
        if amount != unpaid_total {
            return Err(ApiError::Precondition(format!(
                "Payout amount {} does not match unpaid commission total {}",
                amount, unpaid_total
            )));
        }

        // External transfer first; nothing local has been written yet, so a
        // provider failure leaves the ledger untouched.
        let reference = Uuid::new_v4();
        let transfer = state
            .stripe
            .create_transfer(destination, amount, &state.config.payout_currency, reference)
            .await?;

        // All local bookkeeping in one transaction.
        let ledger_result = conn.transaction::<Uuid, ApiError, _>(|conn| {
            AffiliateRepository::find_by_id_with_lock(conn, affiliate_id)?;

            // Re-check under the row lock: a racing payout could have
            // settled the same commissions after the first sum.
            let locked_total = CommissionRepository::unpaid_total(conn, affiliate_id)?;
            if locked_total != amount {
                return Err(ApiError::Precondition(format!(
                    "Unpaid commission total changed from {} to {} while the payout was in flight",
                    amount, locked_total
                )));
            }

            let payout = PayoutRepository::create(
                conn,
                NewPayoutLog {
                    affiliate_id,
                    stripe_transfer_id: &transfer.id,
                    amount,
                    status: PayoutStatus::Paid,
                    notes: req.notes.as_deref(),
                },
            )?;

            CommissionRepository::mark_unpaid_as_paid(conn, affiliate_id)?;

            AffiliateRepository::apply_payout(conn, affiliate_id, amount)?;

            Ok::<Uuid, ApiError>(payout.id)
        });

        let payout_id = match ledger_result {
            Ok(id) => id,
            Err(e) => {
                error!(
                    transfer_id = %transfer.id,
                    affiliate_id = %affiliate_id,
                    error = %e,
                    "Stripe transfer succeeded but ledger write failed"
                );
                return Err(ApiError::PayoutUnrecorded {
                    transfer_id: transfer.id,
                    detail: e.to_string(),
                });
            }
        };

        info!(
            affiliate_id = %affiliate_id,
            amount,
            transfer_id = %transfer.id,
            "Payout processed"
        );

        let _ = AuditService::log_event(
            state,
            Some(admin_id),
            "payout.processed",
            Some("affiliate"),
            Some(&affiliate_id.to_string()),
            json!({
                "amount": amount,
                "stripe_transfer_id": transfer.id.clone(),
                "payout_id": payout_id,
            }),
            None,
        )
        .await;

        Ok(PayoutResponse {
            payout_id,
            stripe_transfer_id: transfer.id,
            amount,
        })
    }
}
