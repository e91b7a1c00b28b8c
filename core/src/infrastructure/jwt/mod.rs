use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, error};

use crate::domain::{
    common::{AuthConfig, entities::app_errors::CoreError},
    jwt::{entities::JwtClaim, ports::TokenRepository},
};

/// HS256 tokens signed with the configured secret.
#[derive(Clone)]
pub struct JwtTokenRepository {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expire_days: i64,
}

impl JwtTokenRepository {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            expire_days: config.jwt_expire_days,
        }
    }
}

impl TokenRepository for JwtTokenRepository {
    fn expire_days(&self) -> i64 {
        self.expire_days
    }

    async fn generate_token(&self, claim: JwtClaim) -> Result<String, CoreError> {
        encode(&Header::new(Algorithm::HS256), &claim, &self.encoding_key).map_err(|e| {
            error!("Failed to sign token: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn verify_token(&self, token: String) -> Result<JwtClaim, CoreError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<JwtClaim>(&token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Rejected token: {}", e);
                CoreError::InvalidToken
            })
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn repository(secret: &str) -> JwtTokenRepository {
        JwtTokenRepository::new(&AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_expire_days: 30,
        })
    }

    #[tokio::test]
    async fn signed_token_verifies() {
        let tokens = repository("secret");
        let claim = JwtClaim::new(Uuid::new_v4(), tokens.expire_days());

        let token = tokens.generate_token(claim.clone()).await.unwrap();

        assert_eq!(tokens.verify_token(token).await, Ok(claim));
    }

    #[tokio::test]
    async fn token_from_another_secret_is_rejected() {
        let token = repository("one")
            .generate_token(JwtClaim::new(Uuid::new_v4(), 1))
            .await
            .unwrap();

        assert_eq!(
            repository("two").verify_token(token).await,
            Err(CoreError::InvalidToken)
        );
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let tokens = repository("secret");
        let token = tokens
            .generate_token(JwtClaim::new(Uuid::new_v4(), -1))
            .await
            .unwrap();

        assert_eq!(tokens.verify_token(token).await, Err(CoreError::InvalidToken));
    }
}
