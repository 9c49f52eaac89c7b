use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;

use crate::database::MongoDB;
use crate::models::Participant;
use crate::utils::AppError;

/// Acesso à collection `participants`
#[derive(Clone)]
pub struct ParticipantRepository {
    collection: Collection<Participant>,
}

impl ParticipantRepository {
    pub fn new(db: &MongoDB) -> Self {
        Self {
            collection: db.collection("participants"),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Participant>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        let participants = cursor.try_collect().await?;
        Ok(participants)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Vec<Participant>, AppError> {
        let cursor = self
            .collection
            .find(doc! { "participantEmail": email })
            .await?;
        let participants = cursor.try_collect().await?;
        Ok(participants)
    }

    pub async fn exists(&self, camp_id: &str, email: &str) -> Result<bool, AppError> {
        let existing = self
            .collection
            .find_one(doc! { "campId": camp_id, "participantEmail": email })
            .await?;
        Ok(existing.is_some())
    }

    /// Insert protegido pelo índice único (campId, participantEmail):
    /// um par duplicado vira AlreadyJoined, mesmo sob requisições concorrentes.
    pub async fn insert(&self, participant: Participant) -> Result<Participant, AppError> {
        match self.collection.insert_one(&participant).await {
            Ok(result) => {
                let mut created = participant;
                created.id = result.inserted_id.as_object_id();
                Ok(created)
            }
            Err(e) if crate::repository::is_duplicate_key_error(&e) => {
                Err(AppError::AlreadyJoined)
            }
            Err(e) => Err(e.into()),
        }
    }
}
