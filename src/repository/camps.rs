use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;

use crate::database::MongoDB;
use crate::models::{Camp, UpdateCampRequest};
use crate::utils::AppError;

/// Limite default do GET /famous-camp
pub const DEFAULT_FAMOUS_LIMIT: i64 = 6;

/// Acesso à collection `camps`
#[derive(Clone)]
pub struct CampRepository {
    collection: Collection<Camp>,
}

/// Filtro de busca: substring case-insensitive em campName OU location.
/// Busca vazia casa com todos os documentos.
fn search_query(search: &str) -> Document {
    doc! {
        "$or": [
            { "campName": { "$regex": search, "$options": "i" } },
            { "location": { "$regex": search, "$options": "i" } },
        ]
    }
}

/// Ordenação por taxa: "lowest" crescente, "highest" decrescente,
/// qualquer outro valor mantém a ordem do store.
fn fee_sort(filter: Option<&str>) -> Option<Document> {
    match filter {
        Some("lowest") => Some(doc! { "campFees": 1 }),
        Some("highest") => Some(doc! { "campFees": -1 }),
        _ => None,
    }
}

/// Ordenação do famous-camp: mais inscritos primeiro
fn popularity_sort() -> Document {
    doc! { "participant_count": -1 }
}

/// Limite efetivo do famous-camp. Valores ausentes ou não-positivos caem no
/// default - 0 significaria "sem limite" para o MongoDB, não "nenhum camp".
pub fn famous_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(n) if n > 0 => n,
        _ => DEFAULT_FAMOUS_LIMIT,
    }
}

fn parse_camp_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}

impl CampRepository {
    pub fn new(db: &MongoDB) -> Self {
        Self {
            collection: db.collection("camps"),
        }
    }

    pub async fn insert(&self, camp: Camp) -> Result<Camp, AppError> {
        let result = self.collection.insert_one(&camp).await?;
        let mut created = camp;
        created.id = result.inserted_id.as_object_id();
        Ok(created)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Camp>, AppError> {
        let object_id = parse_camp_id(id)?;
        let camp = self.collection.find_one(doc! { "_id": object_id }).await?;
        Ok(camp)
    }

    pub async fn find_by_author(&self, author_email: &str) -> Result<Vec<Camp>, AppError> {
        let cursor = self
            .collection
            .find(doc! { "author_email": author_email })
            .await?;
        let camps = cursor.try_collect().await?;
        Ok(camps)
    }

    /// GET /camps - busca por texto + ordenação por taxa
    pub async fn search(&self, search: &str, filter: Option<&str>) -> Result<Vec<Camp>, AppError> {
        let mut find = self.collection.find(search_query(search));
        if let Some(sort) = fee_sort(filter) {
            find = find.sort(sort);
        }
        let camps = find.await?.try_collect().await?;
        Ok(camps)
    }

    /// GET /famous-camp - top-N por participant_count
    pub async fn most_joined(&self, limit: i64) -> Result<Vec<Camp>, AppError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(popularity_sort())
            .limit(limit)
            .await?;
        let camps = cursor.try_collect().await?;
        Ok(camps)
    }

    pub async fn update(&self, id: &str, update: &UpdateCampRequest) -> Result<u64, AppError> {
        let object_id = parse_camp_id(id)?;
        let update_doc = doc! {
            "$set": {
                "campName": &update.camp_name,
                "campFees": update.camp_fees,
                "campDate": &update.camp_date,
                "location": &update.location,
                "professional_name": &update.professional_name,
                "description": &update.description,
            }
        };
        let result = self
            .collection
            .update_one(doc! { "_id": object_id }, update_doc)
            .await?;
        Ok(result.modified_count)
    }

    /// Devolve NotFound se o id não existe - nenhuma mutação acontece nesse caso.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let object_id = parse_camp_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": object_id }).await?;
        if result.deleted_count == 1 {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("camp {}", id)))
        }
    }

    pub async fn increment_participant_count(&self, id: &str) -> Result<(), AppError> {
        let object_id = parse_camp_id(id)?;
        self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$inc": { "participant_count": 1 } },
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_matches_name_or_location() {
        let query = search_query("river");
        let or = query.get_array("$or").unwrap();
        assert_eq!(or.len(), 2);

        let name = or[0].as_document().unwrap().get_document("campName").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), "river");
        assert_eq!(name.get_str("$options").unwrap(), "i");

        let location = or[1].as_document().unwrap().get_document("location").unwrap();
        assert_eq!(location.get_str("$regex").unwrap(), "river");
        assert_eq!(location.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_empty_search_matches_everything() {
        // regex vazio casa com qualquer string
        let query = search_query("");
        let or = query.get_array("$or").unwrap();
        let name = or[0].as_document().unwrap().get_document("campName").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), "");
    }

    #[test]
    fn test_fee_sort_lowest_is_ascending() {
        let sort = fee_sort(Some("lowest")).unwrap();
        assert_eq!(sort.get_i32("campFees").unwrap(), 1);
    }

    #[test]
    fn test_fee_sort_highest_is_descending() {
        let sort = fee_sort(Some("highest")).unwrap();
        assert_eq!(sort.get_i32("campFees").unwrap(), -1);
    }

    #[test]
    fn test_fee_sort_unset_keeps_store_order() {
        assert!(fee_sort(None).is_none());
        assert!(fee_sort(Some("anything-else")).is_none());
    }

    #[test]
    fn test_parse_camp_id_rejects_garbage() {
        assert!(matches!(
            parse_camp_id("not-an-object-id"),
            Err(AppError::InvalidId(_))
        ));
        assert!(parse_camp_id("65b2f0c8e4b0a1d2c3e4f5a6").is_ok());
    }

    #[test]
    fn test_popularity_sort_is_descending_by_count() {
        let sort = popularity_sort();
        assert_eq!(sort.get_i32("participant_count").unwrap(), -1);
    }

    #[test]
    fn test_famous_limit_defaults_to_six() {
        assert_eq!(famous_limit(None), 6);
        assert_eq!(famous_limit(Some(3)), 3);
    }

    #[test]
    fn test_famous_limit_rejects_non_positive_values() {
        // limit 0 no MongoDB é "sem limite" - precisa cair no default
        assert_eq!(famous_limit(Some(0)), DEFAULT_FAMOUS_LIMIT);
        assert_eq!(famous_limit(Some(-5)), DEFAULT_FAMOUS_LIMIT);
    }

    fn test_camp(name: &str, author: &str, count: i64) -> Camp {
        Camp {
            id: None,
            camp_name: name.to_string(),
            camp_fees: 15.0,
            camp_date: "2026-10-01".to_string(),
            location: "Hilltop".to_string(),
            professional_name: "Dr. Silva".to_string(),
            description: "Vision screening".to_string(),
            author_email: author.to_string(),
            participant_count: count,
        }
    }

    async fn test_repo() -> CampRepository {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/medical-camp-test".to_string());
        let db = crate::database::MongoDB::new(&uri)
            .await
            .expect("MongoDB must be running");
        CampRepository::new(&db)
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_delete_missing_camp_is_not_found_and_mutates_nothing() {
        let repo = test_repo().await;

        let camp = repo
            .insert(test_camp("Hilltop Eye Camp", "organizer@camp.org", 0))
            .await
            .unwrap();
        let camp_id = camp.id.unwrap().to_hex();

        // ObjectId recém-gerado - não existe na collection
        let missing_id = ObjectId::new().to_hex();
        let result = repo.delete(&missing_id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        // O camp existente continua intacto
        let untouched = repo.find_by_id(&camp_id).await.unwrap().unwrap();
        assert_eq!(untouched.camp_name, "Hilltop Eye Camp");

        // Deletar o id real funciona e remove de verdade
        repo.delete(&camp_id).await.unwrap();
        assert!(repo.find_by_id(&camp_id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(&camp_id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_most_joined_caps_results_and_orders_by_count() {
        let repo = test_repo().await;

        // Autor único por execução para isolar a consulta de verificação
        let author = format!("famous{}@camp.org", chrono::Utc::now().timestamp_millis());
        for (name, count) in [("A", 5), ("B", 12), ("C", 9), ("D", 1)] {
            repo.insert(test_camp(name, &author, count)).await.unwrap();
        }

        let top = repo.most_joined(3).await.unwrap();
        assert!(top.len() <= 3);
        for pair in top.windows(2) {
            assert!(pair[0].participant_count >= pair[1].participant_count);
        }
    }
}
