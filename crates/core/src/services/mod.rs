pub mod affiliate_service;
pub mod audit_service;
pub mod auth_service;
pub mod content_service;
pub mod payout_service;
pub mod referral_service;
pub mod user_service;
