mod api;
mod database;
mod middleware;
mod models;
mod repository;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::AuthMiddleware;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("🚀 Starting Medical Camp Management System...");

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    log::info!("✅ MongoDB connected successfully");

    // Repositórios por collection, construídos uma vez e injetados nos handlers
    let repos = web::Data::new(repository::Repositories::new(&db));

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_origin("http://localhost:5173") // Frontend dev (Vite)
            .allowed_origin("http://localhost:5174")
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .supports_credentials()
            .max_age(3600);

        // Origem do frontend em produção
        if let Ok(origin) = env::var("CORS_ORIGIN") {
            cors = cors.allowed_origin(&origin);
        }

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(repos.clone())
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Liveness
            .route("/", web::get().to(api::health::banner))
            .route("/health", web::get().to(api::health::health_check))
            // Auth: token cookie issuing / clearing
            .route("/jwt", web::post().to(api::auth::issue_token))
            .route("/logout", web::get().to(api::auth::logout))
            // Users (open)
            .route("/users/{email}", web::post().to(api::users::create_or_fetch_user))
            .route("/all-users", web::get().to(api::users::get_all_users))
            .route("/all-users/role/{email}", web::get().to(api::users::get_user_role))
            // Participants (gated)
            .service(
                web::resource("/participant")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(api::participants::get_all_participants)),
            )
            .service(
                web::resource("/participant/{email}")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(api::participants::get_participants_by_email)),
            )
            // Camps: GET aberto, POST gated - mesmo path, gate por rota
            .service(
                web::resource("/camps")
                    .route(web::get().to(api::camps::get_camps))
                    .route(web::post().to(api::camps::create_camp).wrap(AuthMiddleware)),
            )
            .route("/famous-camp", web::get().to(api::camps::get_famous_camps))
            .route("/camps/{id}", web::get().to(api::camps::get_camp))
            .service(
                web::resource("/manage-camp/{email}")
                    .wrap(AuthMiddleware)
                    .route(web::get().to(api::camps::manage_camps)),
            )
            .service(
                web::resource("/camps-edit/{id}")
                    .wrap(AuthMiddleware)
                    .route(web::patch().to(api::camps::update_camp)),
            )
            .service(
                web::resource("/delete-camp/{id}")
                    .wrap(AuthMiddleware)
                    .route(web::delete().to(api::camps::delete_camp)),
            )
            .service(
                web::resource("/join-camp")
                    .wrap(AuthMiddleware)
                    .route(web::post().to(api::camps::join_camp)),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
