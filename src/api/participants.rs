use actix_web::{web, HttpResponse};

use crate::repository::Repositories;

#[utoipa::path(
    get,
    path = "/participant",
    tag = "Participants",
    responses(
        (status = 200, description = "All participant records"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_all_participants(repos: web::Data<Repositories>) -> HttpResponse {
    match repos.participants.find_all().await {
        Ok(participants) => HttpResponse::Ok().json(participants),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e.to_string()
        })),
    }
}

#[utoipa::path(
    get,
    path = "/participant/{email}",
    tag = "Participants",
    responses(
        (status = 200, description = "Participant records for this email"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_participants_by_email(
    repos: web::Data<Repositories>,
    path: web::Path<String>,
) -> HttpResponse {
    let email = path.into_inner();

    match repos.participants.find_by_email(&email).await {
        Ok(participants) => HttpResponse::Ok().json(participants),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e.to_string()
        })),
    }
}
