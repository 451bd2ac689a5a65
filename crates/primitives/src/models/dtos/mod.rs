pub mod affiliate_dto;
pub mod auth_dto;
pub mod content_dto;
pub mod payout_dto;
pub mod providers;
pub mod referral_dto;
pub mod user_dto;
