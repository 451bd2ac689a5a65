use crate::handlers::{
    admin_affiliates::{
        __path_affiliate_details, __path_all_affiliates, __path_delete_affiliate,
        __path_process_payout,
    },
    admin_audit_logs::__path_audit_logs,
    admin_categories::{__path_create_category, __path_delete_category},
    admin_faqs::{__path_all_faqs, __path_create_faq, __path_delete_faq, __path_update_faq},
    admin_posts::{__path_all_posts, __path_create_post, __path_delete_post, __path_update_post},
    admin_referrals::{__path_convert_referral, __path_mark_referral_lost},
    admin_users::{__path_change_user_role, __path_list_users},
    affiliate_profile::{__path_my_profile, __path_update_my_profile},
    affiliate_stats::{__path_affiliate_stats, __path_my_commissions, __path_my_payouts},
    affiliate_stripe::{__path_stripe_account_status, __path_stripe_onboard},
    content::{
        __path_all_categories, __path_post_by_slug, __path_published_faqs,
        __path_published_posts,
    },
    current_user::__path_current_user_details,
    health::__path_health_check,
    login::__path_login,
    logout::__path_logout,
    register::__path_register,
    track_referral::__path_track_referral,
};
use icetracer_primitives::models::dtos::auth_dto::{LoginRequest, RegisterRequest};
use icetracer_primitives::models::dtos::payout_dto::PayoutRequest;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        register, login, logout, current_user_details, health_check,
        track_referral, published_posts, post_by_slug, all_categories,
        published_faqs, list_users, change_user_role, all_affiliates,
        affiliate_details, delete_affiliate, process_payout, convert_referral,
        mark_referral_lost, create_category, delete_category, all_posts,
        create_post, update_post, delete_post, all_faqs, create_faq,
        update_faq, delete_faq, audit_logs, my_profile, update_my_profile,
        affiliate_stats, my_commissions, my_payouts, stripe_onboard,
        stripe_account_status
    ),
    components(schemas(RegisterRequest, LoginRequest, PayoutRequest)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Content", description = "Public blog and FAQ content"),
        (name = "Referrals", description = "Referral tracking"),
        (name = "Affiliate", description = "Affiliate portal endpoints"),
        (name = "Admin", description = "Admin management endpoints")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
