use serde::Deserialize;

// Minimal projections of the Stripe objects this service touches. Stripe
// returns far more fields; serde drops the rest.

#[derive(Debug, Deserialize)]
pub struct StripeAccount {
    pub id: String,
    #[serde(default)]
    pub payouts_enabled: bool,
    #[serde(default)]
    pub details_submitted: bool,
}

#[derive(Debug, Deserialize)]
pub struct StripeAccountLink {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct StripeTransfer {
    pub id: String,
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct StripeErrorBody {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeErrorBody,
}
