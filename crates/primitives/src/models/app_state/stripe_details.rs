use eyre::Report;
use secrecy::SecretString;
use std::env;

#[derive(Debug, Clone)]
pub struct StripeInfo {
    pub stripe_secret_key: SecretString,
    /// Overridable so tests can point the client at a mock server.
    pub stripe_api_url: String,
}

impl StripeInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            stripe_secret_key: SecretString::from(
                env::var("STRIPE_SECRET_KEY")
                    .map_err(|_| eyre::eyre!("STRIPE_SECRET_KEY must be set"))?,
            ),
            stripe_api_url: env::var("STRIPE_API_URL")
                .unwrap_or_else(|_| "https://api.stripe.com".into()),
        })
    }
}
