pub mod auth;
pub mod camps;
pub mod health;
pub mod participants;
pub mod swagger;
pub mod users;
