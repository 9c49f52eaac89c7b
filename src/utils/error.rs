use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Unauthorized,
    AlreadyJoined,
    NotFound(String),
    InvalidId(String),
    TokenError(String),
    DatabaseError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "unauthorized access"),
            AppError::AlreadyJoined => write!(f, "You have already joined this camp."),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidId(id) => write!(f, "Invalid id: {}", id),
            AppError::TokenError(msg) => write!(f, "Token error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}
