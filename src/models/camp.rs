use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Camp médico publicado por um organizador (armazenado no MongoDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camp {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(rename = "campName")]
    pub camp_name: String,

    /// Taxa de inscrição
    #[serde(rename = "campFees")]
    pub camp_fees: f64,

    #[serde(rename = "campDate")]
    pub camp_date: String,

    pub location: String,

    /// Profissional de saúde responsável
    pub professional_name: String,

    pub description: String,

    /// Email do organizador que criou o camp
    pub author_email: String,

    /// Contador desnormalizado - incrementado apenas pelo join-camp
    #[serde(default)]
    pub participant_count: i64,
}

/// Request para criar camp (POST /camps)
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateCampRequest {
    #[serde(rename = "campName")]
    pub camp_name: String,
    #[serde(rename = "campFees")]
    pub camp_fees: f64,
    #[serde(rename = "campDate")]
    pub camp_date: String,
    pub location: String,
    pub professional_name: String,
    pub description: String,
    pub author_email: String,
}

/// Request para editar camp (PATCH /camps-edit/:id)
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateCampRequest {
    #[serde(rename = "campName")]
    pub camp_name: String,
    #[serde(rename = "campFees")]
    pub camp_fees: f64,
    #[serde(rename = "campDate")]
    pub camp_date: String,
    pub location: String,
    pub professional_name: String,
    pub description: String,
}

impl From<CreateCampRequest> for Camp {
    fn from(req: CreateCampRequest) -> Self {
        Camp {
            id: None,
            camp_name: req.camp_name,
            camp_fees: req.camp_fees,
            camp_date: req.camp_date,
            location: req.location,
            professional_name: req.professional_name,
            description: req.description,
            author_email: req.author_email,
            participant_count: 0,
        }
    }
}
