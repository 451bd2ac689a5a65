pub mod app_config;
pub mod jwt_details;
pub mod stripe_details;

pub use app_config::AppConfig;
pub use jwt_details::JwtInfo;
pub use stripe_details::StripeInfo;
