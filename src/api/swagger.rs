use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Medical Camp Management System API",
        version = "1.0.0",
        description = "REST backend for the Medical Camp Management System.\n\n**Authentication:** protected endpoints require a valid JWT delivered as the httpOnly `token` cookie (issued by POST /jwt).\n\n**Features:**\n- Cookie-based JWT authentication\n- User registration with participant/organizer roles\n- Camp catalog with search and fee sorting\n- Camp registration with per-camp join counter",
    ),
    paths(
        // Auth
        crate::api::auth::issue_token,
        crate::api::auth::logout,

        // Health
        crate::api::health::health_check,

        // Users
        crate::api::users::create_or_fetch_user,
        crate::api::users::get_all_users,
        crate::api::users::get_user_role,

        // Camps
        crate::api::camps::create_camp,
        crate::api::camps::get_camps,
        crate::api::camps::get_famous_camps,
        crate::api::camps::get_camp,
        crate::api::camps::manage_camps,
        crate::api::camps::update_camp,
        crate::api::camps::delete_camp,
        crate::api::camps::join_camp,

        // Participants
        crate::api::participants::get_all_participants,
        crate::api::participants::get_participants_by_email,
    ),
    components(
        schemas(
            crate::api::auth::TokenRequest,
            crate::api::health::HealthResponse,
            crate::models::UserProfileRequest,
            crate::models::UserRoleResponse,
            crate::models::CreateCampRequest,
            crate::models::UpdateCampRequest,
            crate::models::JoinCampRequest,
        )
    ),
    tags(
        (name = "Auth", description = "Token issuing and logout"),
        (name = "Health", description = "Liveness"),
        (name = "Users", description = "User registration and roles"),
        (name = "Camps", description = "Camp catalog and registration"),
        (name = "Participants", description = "Registration records"),
    )
)]
pub struct ApiDoc;
