use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::middleware::auth::TOKEN_COOKIE;
use crate::services::token_service;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct TokenRequest {
    pub email: String,
}

fn is_production() -> bool {
    std::env::var("APP_ENV").map(|v| v == "production").unwrap_or(false)
}

/// Em produção o frontend roda em outro domínio: cookie precisa de
/// Secure + SameSite=None. Em dev fica Strict e sem Secure.
fn token_cookie(value: String) -> Cookie<'static> {
    let builder = Cookie::build(TOKEN_COOKIE, value).http_only(true).path("/");

    if is_production() {
        builder.secure(true).same_site(SameSite::None).finish()
    } else {
        builder.same_site(SameSite::Strict).finish()
    }
}

#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Auth",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued and set as httpOnly cookie"),
        (status = 500, description = "Token signing failed")
    )
)]
pub async fn issue_token(request: web::Json<TokenRequest>) -> HttpResponse {
    log::info!("🔐 POST /jwt - email: {}", request.email);

    match token_service::issue(&request.email) {
        Ok(token) => HttpResponse::Ok()
            .cookie(token_cookie(token))
            .json(serde_json::json!({ "success": true })),
        Err(e) => {
            log::error!("❌ Failed to issue token for {}: {}", request.email, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Cookie cleared (client-side only, token stays valid)")
    )
)]
pub async fn logout() -> HttpResponse {
    log::info!("👋 GET /logout");

    let mut cookie = token_cookie(String::new());
    cookie.set_max_age(CookieDuration::ZERO);

    HttpResponse::Ok()
        .cookie(cookie)
        .json(serde_json::json!({ "success": true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn test_issue_token_sets_http_only_cookie() {
        let app = test::init_service(
            App::new().route("/jwt", web::post().to(issue_token)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/jwt")
            .set_json(serde_json::json!({ "email": "alice@camp.org" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_success());
        let cookie = res
            .response()
            .cookies()
            .find(|c| c.name() == TOKEN_COOKIE)
            .expect("token cookie missing");
        assert_eq!(cookie.http_only(), Some(true));
        assert!(!cookie.value().is_empty());
    }

    #[actix_web::test]
    async fn test_logout_clears_cookie() {
        let app =
            test::init_service(App::new().route("/logout", web::get().to(logout))).await;

        let req = test::TestRequest::get().uri("/logout").to_request();
        let res = test::call_service(&app, req).await;

        let cookie = res
            .response()
            .cookies()
            .find(|c| c.name() == TOKEN_COOKIE)
            .expect("token cookie missing");
        assert!(cookie.value().is_empty());
        assert_eq!(cookie.max_age(), Some(CookieDuration::ZERO));
    }
}
