pub mod affiliate_repository;
pub mod audit_repository;
pub mod category_repository;
pub mod commission_repository;
pub mod faq_repository;
pub mod payout_repository;
pub mod post_repository;
pub mod referral_repository;
pub mod user_repository;
