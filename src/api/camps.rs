use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::models::{Camp, CreateCampRequest, JoinCampRequest, UpdateCampRequest};
use crate::repository::{famous_limit, Repositories};
use crate::services::registration_service;
use crate::utils::AppError;

#[derive(Debug, Deserialize)]
pub struct CampQuery {
    pub search: Option<String>,
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FamousQuery {
    pub limit: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/camps",
    tag = "Camps",
    request_body = CreateCampRequest,
    responses(
        (status = 200, description = "Camp created"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create_camp(
    repos: web::Data<Repositories>,
    request: web::Json<CreateCampRequest>,
) -> HttpResponse {
    log::info!("🏕️  POST /camps - {}", request.camp_name);

    let camp = Camp::from(request.into_inner());
    match repos.camps.insert(camp).await {
        Ok(created) => HttpResponse::Ok().json(created),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e.to_string()
        })),
    }
}

#[utoipa::path(
    get,
    path = "/camps",
    tag = "Camps",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring match on campName or location"),
        ("filter" = Option<String>, Query, description = "lowest | highest - sort by campFees")
    ),
    responses(
        (status = 200, description = "Matching camps"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_camps(
    repos: web::Data<Repositories>,
    query: web::Query<CampQuery>,
) -> HttpResponse {
    let search = query.search.as_deref().unwrap_or("");

    match repos.camps.search(search, query.filter.as_deref()).await {
        Ok(camps) => HttpResponse::Ok().json(camps),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e.to_string()
        })),
    }
}

#[utoipa::path(
    get,
    path = "/famous-camp",
    tag = "Camps",
    params(
        ("limit" = Option<i64>, Query, description = "Max camps to return, default 6")
    ),
    responses(
        (status = 200, description = "Top camps by participant_count, descending"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_famous_camps(
    repos: web::Data<Repositories>,
    query: web::Query<FamousQuery>,
) -> HttpResponse {
    let limit = famous_limit(query.limit);

    match repos.camps.most_joined(limit).await {
        Ok(camps) => HttpResponse::Ok().json(camps),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e.to_string()
        })),
    }
}

#[utoipa::path(
    get,
    path = "/camps/{id}",
    tag = "Camps",
    responses(
        (status = 200, description = "Camp found"),
        (status = 400, description = "Invalid camp id"),
        (status = 404, description = "No camp with this id"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_camp(repos: web::Data<Repositories>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();

    match repos.camps.find_by_id(&id).await {
        Ok(Some(camp)) => HttpResponse::Ok().json(camp),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Camp not found"
        })),
        Err(AppError::InvalidId(_)) => HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid camp id"
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e.to_string()
        })),
    }
}

#[utoipa::path(
    get,
    path = "/manage-camp/{email}",
    tag = "Camps",
    responses(
        (status = 200, description = "Camps authored by this email"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Database error")
    )
)]
pub async fn manage_camps(
    repos: web::Data<Repositories>,
    path: web::Path<String>,
) -> HttpResponse {
    let author_email = path.into_inner();

    match repos.camps.find_by_author(&author_email).await {
        Ok(camps) => HttpResponse::Ok().json(camps),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e.to_string()
        })),
    }
}

#[utoipa::path(
    patch,
    path = "/camps-edit/{id}",
    tag = "Camps",
    request_body = UpdateCampRequest,
    responses(
        (status = 200, description = "Camp updated"),
        (status = 400, description = "Invalid camp id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Database error")
    )
)]
pub async fn update_camp(
    repos: web::Data<Repositories>,
    path: web::Path<String>,
    request: web::Json<UpdateCampRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("✏️  PATCH /camps-edit/{}", id);

    match repos.camps.update(&id, &request).await {
        Ok(modified) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "modified": modified
        })),
        Err(AppError::InvalidId(_)) => HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid camp id"
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": e.to_string()
        })),
    }
}

#[utoipa::path(
    delete,
    path = "/delete-camp/{id}",
    tag = "Camps",
    responses(
        (status = 200, description = "Camp deleted"),
        (status = 400, description = "Invalid camp id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No camp with this id - nothing deleted"),
        (status = 500, description = "Database error")
    )
)]
pub async fn delete_camp(repos: web::Data<Repositories>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🗑️  DELETE /delete-camp/{}", id);

    match repos.camps.delete(&id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Camp deleted successfully"
        })),
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Camp not found"
        })),
        Err(AppError::InvalidId(_)) => HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid camp id"
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": e.to_string()
        })),
    }
}

#[utoipa::path(
    post,
    path = "/join-camp",
    tag = "Camps",
    request_body = JoinCampRequest,
    responses(
        (status = 200, description = "Participant registered and camp count incremented"),
        (status = 400, description = "Already joined this camp"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Database error")
    )
)]
pub async fn join_camp(
    repos: web::Data<Repositories>,
    request: web::Json<JoinCampRequest>,
) -> HttpResponse {
    log::info!(
        "🎟️  POST /join-camp - camp: {}, email: {}",
        request.camp_id,
        request.participant_email
    );

    match registration_service::join_camp(&repos, request.into_inner()).await {
        Ok(participant) => HttpResponse::Ok().json(participant),
        Err(AppError::AlreadyJoined) => HttpResponse::BadRequest().json(serde_json::json!({
            "message": "You have already joined this camp."
        })),
        Err(AppError::InvalidId(_)) => HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid camp id"
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e.to_string()
        })),
    }
}
