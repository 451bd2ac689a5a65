pub mod affiliate;
pub mod audit_log;
pub mod category;
pub mod commission_log;
pub mod enum_types;
pub mod faq;
pub mod payout_log;
pub mod post;
pub mod referral;
pub mod user;
