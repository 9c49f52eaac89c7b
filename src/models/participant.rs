use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Registro de inscrição: prova que um email entrou em um camp.
/// Único por (campId, participantEmail) - índice composto no MongoDB.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// ObjectId do camp como hex string
    #[serde(rename = "campId")]
    pub camp_id: String,

    #[serde(rename = "participantEmail")]
    pub participant_email: String,

    /// Metadados da inscrição enviados pelo frontend (passthrough)
    #[serde(flatten)]
    pub extra: Document,
}

/// Body do POST /join-camp
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct JoinCampRequest {
    #[serde(rename = "campId")]
    pub camp_id: String,
    #[serde(rename = "participantEmail")]
    pub participant_email: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Document,
}
