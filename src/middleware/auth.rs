use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    Error, HttpMessage, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::services::token_service;

/// Nome do cookie que transporta o token
pub const TOKEN_COOKIE: &str = "token";

/// Gate de autorização: exige um cookie `token` com JWT válido.
/// Só prova que um token emitido existe e não expirou - não há checagem de
/// role nem de ownership do recurso.
pub struct AuthMiddleware;

fn unauthorized() -> Error {
    let response = HttpResponse::Unauthorized()
        .json(serde_json::json!({ "message": "unauthorized access" }));
    InternalError::from_response("unauthorized access", response).into()
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = match req.cookie(TOKEN_COOKIE) {
            Some(cookie) => cookie.value().to_string(),
            None => {
                return Box::pin(async move { Err(unauthorized()) });
            }
        };

        match token_service::verify(&token) {
            Ok(claims) => {
                // Identidade decodificada fica disponível via web::ReqData<Claims>
                req.extensions_mut().insert(claims);

                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res)
                })
            }
            Err(_) => Box::pin(async move { Err(unauthorized()) }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::{test, web, App, HttpResponse};

    use crate::services::token_service::Claims;

    async fn whoami(user: web::ReqData<Claims>) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "email": user.email }))
    }

    #[actix_web::test]
    async fn test_request_without_cookie_is_rejected() {
        let app = test::init_service(
            App::new().service(
                web::resource("/gated")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/gated").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_request_with_garbage_token_is_rejected() {
        let app = test::init_service(
            App::new().service(
                web::resource("/gated")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/gated")
            .cookie(Cookie::new(TOKEN_COOKIE, "definitely-not-a-jwt"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_cookie_forwards_claims_to_handler() {
        let token = token_service::issue("alice@camp.org").unwrap();

        let app = test::init_service(
            App::new().service(
                web::resource("/gated")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/gated")
            .cookie(Cookie::new(TOKEN_COOKIE, token))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["email"], "alice@camp.org");
    }
}
