pub mod affiliate_profile;
pub mod affiliate_stats;
pub mod affiliate_stripe;
pub mod admin_affiliates;
pub mod admin_audit_logs;
pub mod admin_categories;
pub mod admin_faqs;
pub mod admin_posts;
pub mod admin_referrals;
pub mod admin_users;
pub mod content;
pub mod current_user;
pub mod health;
pub mod login;
pub mod logout;
pub mod register;
pub mod track_referral;
