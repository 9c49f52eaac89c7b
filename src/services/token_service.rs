use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::utils::AppError;

/// Validade fixa do token - sem refresh, sem revogação
const TOKEN_VALIDITY_DAYS: i64 = 365;

/// Claims do JWT: só a identidade (email) + timestamps
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

fn get_token_secret() -> String {
    std::env::var("ACCESS_TOKEN_SECRET")
        .unwrap_or_else(|_| "default-secret-change-me".to_string())
}

/// Assina um token HS256 com expiração fixa de 365 dias
pub fn issue(email: &str) -> Result<String, AppError> {
    issue_with_secret(email, &get_token_secret())
}

/// Verifica assinatura e expiração; qualquer falha vira Unauthorized
pub fn verify(token: &str) -> Result<Claims, AppError> {
    verify_with_secret(token, &get_token_secret())
}

fn issue_with_secret(email: &str, secret: &str) -> Result<String, AppError> {
    let iat = Utc::now().timestamp() as usize;
    let exp = (Utc::now() + Duration::days(TOKEN_VALIDITY_DAYS)).timestamp() as usize;

    let claims = Claims {
        email: email.to_string(),
        iat,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| AppError::TokenError(format!("Failed to sign token: {}", e)))
}

fn verify_with_secret(token: &str, secret: &str) -> Result<Claims, AppError> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_ref()), &validation)
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_then_verify_round_trips_the_email() {
        let token = issue_with_secret("user@camp.org", SECRET).unwrap();
        let claims = verify_with_secret(&token, SECRET).unwrap();

        assert_eq!(claims.email, "user@camp.org");
        assert_eq!(
            claims.exp - claims.iat,
            (Duration::days(TOKEN_VALIDITY_DAYS).num_seconds()) as usize
        );
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = issue_with_secret("user@camp.org", SECRET).unwrap();
        let result = verify_with_secret(&token, "another-secret");
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let token = issue_with_secret("user@camp.org", SECRET).unwrap();
        // Corrompe a assinatura (último segmento)
        let mut tampered = token[..token.len() - 2].to_string();
        tampered.push_str("xx");
        let result = verify_with_secret(&tampered, SECRET);
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        // Token assinado corretamente mas com exp no passado
        let iat = (Utc::now() - Duration::days(400)).timestamp() as usize;
        let exp = (Utc::now() - Duration::days(35)).timestamp() as usize;
        let claims = Claims {
            email: "user@camp.org".to_string(),
            iat,
            exp,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        let result = verify_with_secret(&token, SECRET);
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let result = verify_with_secret("not-a-jwt", SECRET);
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
