use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::models::{default_role, User, UserProfileRequest, UserRoleResponse};
use crate::repository::Repositories;

#[utoipa::path(
    post,
    path = "/users/{email}",
    tag = "Users",
    request_body = UserProfileRequest,
    responses(
        (status = 200, description = "User created, or the existing record if the email is already registered"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create_or_fetch_user(
    repos: web::Data<Repositories>,
    path: web::Path<String>,
    request: web::Json<UserProfileRequest>,
) -> HttpResponse {
    let email = path.into_inner();
    log::info!("📝 POST /users/{}", email);

    let profile = request.into_inner();
    let user = User {
        id: None,
        email,
        name: profile.name,
        photo: profile.photo,
        role: default_role(),
        timestamp: Utc::now().timestamp_millis(),
        extra: profile.extra,
    };

    match repos.users.create_or_fetch(user).await {
        Ok(saved) => HttpResponse::Ok().json(saved),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e.to_string()
        })),
    }
}

#[utoipa::path(
    get,
    path = "/all-users",
    tag = "Users",
    responses(
        (status = 200, description = "All registered users"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_all_users(repos: web::Data<Repositories>) -> HttpResponse {
    match repos.users.find_all().await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            log::error!("❌ Error fetching users: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Internal Server Error"
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/all-users/role/{email}",
    tag = "Users",
    responses(
        (status = 200, description = "Role of the user, null when the email is unknown", body = UserRoleResponse),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_user_role(
    repos: web::Data<Repositories>,
    path: web::Path<String>,
) -> HttpResponse {
    let email = path.into_inner();

    match repos.users.find_role(&email).await {
        Ok(role) => HttpResponse::Ok().json(UserRoleResponse { role }),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e.to_string()
        })),
    }
}
