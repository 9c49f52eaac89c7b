use mongodb::{Client, Collection, Database};
use std::error::Error;

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool otimizado
        client_options.max_pool_size = Some(20);  // Max 20 conexões simultâneas
        client_options.min_pool_size = Some(5);   // Mantém 5 conexões sempre vivas
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));  // 5min idle

        // Timeouts otimizados
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty() && !s.contains('@'))
            .unwrap_or("medical-camp");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates necessary indexes for optimal query performance
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        // Unique index for users: (email) - idempotent user creation
        let users = self.database().collection::<mongodb::bson::Document>("users");

        let users_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match users.create_index(users_index).await {
            Ok(_) => log::info!("   ✅ Index created: users(email) unique"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // Unique compound index for participants: (campId, participantEmail)
        // Guarantees at most one registration per camp/email pair even under
        // concurrent join requests - the insert is the authority, not the pre-check.
        let participants = self
            .database()
            .collection::<mongodb::bson::Document>("participants");

        let participants_index = IndexModel::builder()
            .keys(doc! { "campId": 1, "participantEmail": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match participants.create_index(participants_index).await {
            Ok(_) => log::info!("   ✅ Index created: participants(campId, participantEmail) unique"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // Index for camps: (author_email) - for the manage-camp query
        let camps = self.database().collection::<mongodb::bson::Document>("camps");

        let camps_author_index = IndexModel::builder()
            .keys(doc! { "author_email": 1 })
            .build();

        match camps.create_index(camps_author_index).await {
            Ok(_) => log::info!("   ✅ Index created: camps(author_email)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // Index for camps: (participant_count) - for the famous-camp query
        let camps_count_index = IndexModel::builder()
            .keys(doc! { "participant_count": -1 })
            .build();

        match camps.create_index(camps_count_index).await {
            Ok(_) => log::info!("   ✅ Index created: camps(participant_count)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/medical-camp".to_string());

        let db = MongoDB::new(&uri).await;
        assert!(db.is_ok());
    }
}
