use crate::models::app_state::jwt_details::JwtInfo;
use crate::models::app_state::stripe_details::StripeInfo;
use eyre::Report;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_details: JwtInfo,

    pub app_url: String,

    pub stripe_details: StripeInfo,

    /// Payouts are denominated in a single currency (US-only service).
    pub payout_currency: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            jwt_details: JwtInfo::new()?,

            app_url: env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".into()),

            stripe_details: StripeInfo::new()?,

            payout_currency: env::var("PAYOUT_CURRENCY").unwrap_or_else(|_| "usd".into()),
        })
    }
}
