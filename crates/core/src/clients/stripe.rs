use icetracer_primitives::error::ApiError;
use icetracer_primitives::models::dtos::providers::stripe::{
    StripeAccount, StripeAccountLink, StripeErrorResponse, StripeTransfer,
};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::warn;
use uuid::Uuid;

/// Thin Stripe Connect client over the shared reqwest client. Stripe's API
/// is form-encoded on write and JSON on read; only the handful of endpoints
/// this service needs are wrapped.
#[derive(Clone)]
pub struct StripeClient {
    http: Client,
    base_url: Url,
    secret_key: SecretString,
}

impl StripeClient {
    pub fn new(http: Client, base_url: &str, secret_key: SecretString) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ApiError::Internal("Invalid Stripe base URL".into()))?;

        Ok(Self {
            http,
            base_url,
            secret_key,
        })
    }

    /// Creates an Express connected account for an affiliate.
    pub async fn create_express_account(&self, email: &str) -> Result<StripeAccount, ApiError> {
        self.post_form(
            "v1/accounts",
            &[("type", "express"), ("email", email)],
        )
        .await
    }

    /// Generates a one-time onboarding link for a connected account.
    pub async fn create_account_link(
        &self,
        account_id: &str,
        refresh_url: &str,
        return_url: &str,
    ) -> Result<StripeAccountLink, ApiError> {
        self.post_form(
            "v1/account_links",
            &[
                ("account", account_id),
                ("refresh_url", refresh_url),
                ("return_url", return_url),
                ("type", "account_onboarding"),
            ],
        )
        .await
    }

    pub async fn retrieve_account(&self, account_id: &str) -> Result<StripeAccount, ApiError> {
        let url = self.endpoint(&format!("v1/accounts/{}", account_id));

        let resp = self
            .http
            .get(url)
            .bearer_auth(self.secret_key.expose_secret())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to reach Stripe");
                ApiError::Payment("Stripe service unavailable".into())
            })?;

        Self::parse_response(resp, "retrieve_account").await
    }

    /// Moves funds from the platform balance to a connected account.
    pub async fn create_transfer(
        &self,
        destination: &str,
        amount: i64,
        currency: &str,
        reference: Uuid,
    ) -> Result<StripeTransfer, ApiError> {
        let amount = amount.to_string();
        let reference = reference.to_string();

        self.post_form(
            "v1/transfers",
            &[
                ("amount", amount.as_str()),
                ("currency", currency),
                ("destination", destination),
                ("metadata[payout_reference]", reference.as_str()),
            ],
        )
        .await
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);

        let resp = self
            .http
            .post(url)
            .bearer_auth(self.secret_key.expose_secret())
            .form(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, path, "Failed to reach Stripe");
                ApiError::Payment("Stripe service unavailable".into())
            })?;

        Self::parse_response(resp, path).await
    }

    async fn parse_response<T: DeserializeOwned>(
        resp: reqwest::Response,
        context: &str,
    ) -> Result<T, ApiError> {
        let status = resp.status();
        let body_text = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            let message = serde_json::from_str::<StripeErrorResponse>(&body_text)
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| "Stripe request failed".to_string());

            warn!(
                http_status = status.as_u16(),
                context,
                stripe_message = %message,
                "Stripe request rejected"
            );
            return Err(ApiError::Payment(message));
        }

        serde_json::from_str(&body_text).map_err(|e| {
            tracing::error!(
                error = %e,
                context,
                response = %body_text.chars().take(200).collect::<String>(),
                "Invalid JSON from Stripe"
            );
            ApiError::Payment("Invalid Stripe response".into())
        })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }
}
