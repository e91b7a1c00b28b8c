use crate::domain::{common::entities::app_errors::CoreError, jwt::entities::JwtClaim};

#[cfg_attr(test, mockall::automock)]
pub trait TokenRepository: Send + Sync {
    /// Token lifetime in days for newly issued claims.
    fn expire_days(&self) -> i64;

    fn generate_token(
        &self,
        claim: JwtClaim,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Fails with [`CoreError::InvalidToken`] on bad signature or expiry.
    fn verify_token(
        &self,
        token: String,
    ) -> impl Future<Output = Result<JwtClaim, CoreError>> + Send;
}
