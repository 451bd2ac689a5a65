use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    admin_affiliates::{all_affiliates, affiliate_details, delete_affiliate, process_payout},
    admin_audit_logs::audit_logs,
    admin_categories::{create_category, delete_category},
    admin_faqs::{all_faqs, create_faq, delete_faq, update_faq},
    admin_posts::{all_posts, create_post, delete_post, update_post},
    admin_referrals::{convert_referral, mark_referral_lost},
    admin_users::{change_user_role, list_users},
    affiliate_profile::{my_profile, update_my_profile},
    affiliate_stats::{affiliate_stats, my_commissions, my_payouts},
    affiliate_stripe::{stripe_account_status, stripe_onboard},
    content::{all_categories, post_by_slug, published_faqs, published_posts},
    current_user::current_user_details,
    health::health_check,
    login::login,
    logout::logout,
    register::register,
    track_referral::track_referral,
};
use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use icetracer_core::{AppState, SecurityConfig};
use icetracer_primitives::models::UserRole;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Router {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .finish()
            .expect("governor config is static and valid"),
    );

    let public_router = create_public_routers(metric_handle);
    let authenticated_router = create_authenticated_routers(&state);
    let admin_router = create_admin_routers(&state);
    let affiliate_router = create_affiliate_routers(&state);

    let mut router = Router::new()
        .merge(public_router)
        .merge(authenticated_router)
        .merge(admin_router)
        .merge(affiliate_router)
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        )
        .layer(metric_layer);

    // tower_governor cannot extract a peer address under axum-test
    if std::env::var("APP_ENV").unwrap_or_default() != "test" {
        router = router.layer(GovernorLayer::new(governor_conf));
    }

    router.with_state(state)
}

fn create_public_routers(metric_handle: PrometheusHandle) -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/r/{slug}", post(track_referral))
        .route("/api/posts", get(published_posts))
        .route("/api/posts/{slug}", get(post_by_slug))
        .route("/api/categories", get(all_categories))
        .route("/api/faqs", get(published_faqs))
        .route("/api/health", get(health_check))
        .route(
            "/metrics",
            get(move || std::future::ready(metric_handle.render())),
        )
}

fn create_authenticated_routers(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/current_user", get(current_user_details))
        .route("/api/auth/logout", post(logout))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::auth_middleware,
        ))
}

// Last-added layer runs first, so the auth layer goes on after the role
// gate: authenticate, then authorize.
fn create_admin_routers(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/admin/users", get(list_users))
        .route("/api/admin/users/{user_id}/role", put(change_user_role))
        .route("/api/admin/affiliates", get(all_affiliates))
        .route(
            "/api/admin/affiliates/{affiliate_id}",
            get(affiliate_details).delete(delete_affiliate),
        )
        .route(
            "/api/admin/affiliates/{affiliate_id}/payout",
            post(process_payout),
        )
        .route(
            "/api/admin/referrals/{referral_id}/convert",
            post(convert_referral),
        )
        .route(
            "/api/admin/referrals/{referral_id}/mark_lost",
            post(mark_referral_lost),
        )
        .route("/api/admin/categories", post(create_category))
        .route("/api/admin/categories/{category_id}", delete(delete_category))
        .route("/api/admin/posts", get(all_posts).post(create_post))
        .route(
            "/api/admin/posts/{post_id}",
            put(update_post).delete(delete_post),
        )
        .route("/api/admin/faqs", get(all_faqs).post(create_faq))
        .route(
            "/api/admin/faqs/{faq_id}",
            put(update_faq).delete(delete_faq),
        )
        .route("/api/admin/audit_logs", get(audit_logs))
        .layer(middleware::from_fn(|req, next| {
            SecurityConfig::require_role(req, next, UserRole::Admin)
        }))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::auth_middleware,
        ))
}

fn create_affiliate_routers(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/affiliate/profile",
            get(my_profile).put(update_my_profile),
        )
        .route("/api/affiliate/stats", get(affiliate_stats))
        .route("/api/affiliate/commissions", get(my_commissions))
        .route("/api/affiliate/payouts", get(my_payouts))
        .route("/api/affiliate/stripe/onboard", post(stripe_onboard))
        .route("/api/affiliate/stripe/status", get(stripe_account_status))
        .layer(middleware::from_fn(|req, next| {
            SecurityConfig::require_role(req, next, UserRole::Affiliate)
        }))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::auth_middleware,
        ))
}
