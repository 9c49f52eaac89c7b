use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Usuário do sistema (armazenado no MongoDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// PRIMARY IDENTIFIER - email único por usuário
    pub email: String,

    pub name: Option<String>,

    pub photo: Option<String>,

    /// "participant" ou "organizer"
    #[serde(default = "default_role")]
    pub role: String,

    /// Timestamp de criação (ms since epoch)
    #[serde(default)]
    pub timestamp: i64,

    /// Campos de perfil extras enviados pelo frontend (passthrough)
    #[serde(flatten)]
    pub extra: Document,
}

pub fn default_role() -> String {
    "participant".to_string()
}

/// Body do POST /users/:email - campos de perfil livres
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UserProfileRequest {
    pub name: Option<String>,
    pub photo: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserRoleResponse {
    pub role: Option<String>,
}
