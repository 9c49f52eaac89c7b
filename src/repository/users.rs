use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;

use crate::database::MongoDB;
use crate::models::User;
use crate::utils::AppError;

/// Acesso à collection `users`
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &MongoDB) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = self.collection.find_one(doc! { "email": email }).await?;
        Ok(user)
    }

    /// Cria o usuário se o email ainda não existe; caso contrário devolve o
    /// registro já gravado, sem alterar nada (criação idempotente por email).
    pub async fn create_or_fetch(&self, user: User) -> Result<User, AppError> {
        if let Some(existing) = self.find_by_email(&user.email).await? {
            return Ok(existing);
        }

        match self.collection.insert_one(&user).await {
            Ok(result) => {
                let mut created = user;
                created.id = result.inserted_id.as_object_id();
                Ok(created)
            }
            // Corrida entre dois POSTs para o mesmo email: o índice único
            // rejeita o segundo insert, devolvemos o registro vencedor.
            Err(e) if crate::repository::is_duplicate_key_error(&e) => self
                .find_by_email(&user.email)
                .await?
                .ok_or_else(|| AppError::DatabaseError(e.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        let users = cursor.try_collect().await?;
        Ok(users)
    }

    pub async fn find_role(&self, email: &str) -> Result<Option<String>, AppError> {
        let user = self.find_by_email(email).await?;
        Ok(user.map(|u| u.role))
    }
}
