use crate::domain::{
    authentication::value_objects::{AuthToken, Identity, LoginInput, RegisterInput},
    common::entities::app_errors::CoreError,
    user::entities::User,
};

pub trait AuthService: Send + Sync {
    fn register(
        &self,
        input: RegisterInput,
    ) -> impl Future<Output = Result<AuthToken, CoreError>> + Send;

    fn login(&self, input: LoginInput) -> impl Future<Output = Result<AuthToken, CoreError>> + Send;

    /// Resolves a bearer token to the identity of a still existing user.
    fn authenticate(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;

    fn get_me(&self, identity: Identity) -> impl Future<Output = Result<User, CoreError>> + Send;
}
