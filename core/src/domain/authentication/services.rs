use tracing::{info, instrument};

use crate::domain::{
    authentication::{
        ports::AuthService,
        value_objects::{AuthToken, Identity, LoginInput, RegisterInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    jwt::{entities::JwtClaim, ports::TokenRepository},
    user::{
        entities::{Role, User},
        ports::UserRepository,
    },
};

impl<B, C, R, U, H, T, HC> Service<B, C, R, U, H, T, HC>
where
    T: TokenRepository,
{
    async fn issue_token(&self, user: &User) -> Result<AuthToken, CoreError> {
        let claim = JwtClaim::new(user.id, self.token_repository.expire_days());
        let token = self.token_repository.generate_token(claim).await?;

        Ok(AuthToken { token })
    }
}

impl<B, C, R, U, H, T, HC> AuthService for Service<B, C, R, U, H, T, HC>
where
    B: Send + Sync,
    C: Send + Sync,
    R: Send + Sync,
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
    HC: Send + Sync,
{
    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn register(&self, input: RegisterInput) -> Result<AuthToken, CoreError> {
        let role = input.role.unwrap_or_default();
        if role == Role::Admin {
            return Err(CoreError::Invalid(
                "Role admin cannot be self-assigned".to_string(),
            ));
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;
        let user = self
            .user_repository
            .create(User::new(input.name, input.email, role), password_hash)
            .await?;

        info!(user_id = %user.id, "user registered");
        self.issue_token(&user).await
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn login(&self, input: LoginInput) -> Result<AuthToken, CoreError> {
        let (user, password_hash) = self
            .user_repository
            .get_by_email_with_password(input.email.to_lowercase())
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let matches = self
            .hasher_repository
            .verify_password(input.password, password_hash)
            .await?;
        if !matches {
            return Err(CoreError::InvalidCredentials);
        }

        self.issue_token(&user).await
    }

    async fn authenticate(&self, token: String) -> Result<Identity, CoreError> {
        let claim = self
            .token_repository
            .verify_token(token)
            .await
            .map_err(|_| CoreError::Unauthorized)?;

        let user = self
            .user_repository
            .get_by_id(claim.sub)
            .await?
            .ok_or(CoreError::Unauthorized)?;

        Ok(Identity::new(user))
    }

    async fn get_me(&self, identity: Identity) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        crypto::ports::MockHasherRepository, jwt::ports::MockTokenRepository,
        user::ports::MockUserRepository,
    };

    type AuthOnly = Service<(), (), (), MockUserRepository, MockHasherRepository, MockTokenRepository, ()>;

    fn service(
        users: MockUserRepository,
        hasher: MockHasherRepository,
        tokens: MockTokenRepository,
    ) -> AuthOnly {
        Service::new((), (), (), users, hasher, tokens, ())
    }

    fn jane() -> User {
        User::new("Jane".into(), "jane@example.com".into(), Role::User)
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_rejected() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email_with_password()
            .returning(|_| Box::pin(async { Ok(Some((jane(), "hash".to_string()))) }));
        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(false) }));
        let mut tokens = MockTokenRepository::new();
        tokens.expect_generate_token().never();

        let result = service(users, hasher, tokens)
            .login(LoginInput {
                email: "jane@example.com".into(),
                password: "wrong".into(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_rejected() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email_with_password()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(users, MockHasherRepository::new(), MockTokenRepository::new())
            .login(LoginInput {
                email: "ghost@example.com".into(),
                password: "secret".into(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_issues_token_for_valid_credentials() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email_with_password()
            .withf(|email| email == "jane@example.com")
            .returning(|_| Box::pin(async { Ok(Some((jane(), "hash".to_string()))) }));
        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(true) }));
        let mut tokens = MockTokenRepository::new();
        tokens.expect_expire_days().return_const(30_i64);
        tokens
            .expect_generate_token()
            .returning(|_| Box::pin(async { Ok("signed".to_string()) }));

        let token = service(users, hasher, tokens)
            .login(LoginInput {
                email: "Jane@Example.com".into(),
                password: "secret".into(),
            })
            .await;

        assert_eq!(
            token,
            Ok(AuthToken {
                token: "signed".to_string()
            })
        );
    }

    #[tokio::test]
    async fn register_refuses_admin_role() {
        let mut users = MockUserRepository::new();
        users.expect_create().never();

        let result = service(users, MockHasherRepository::new(), MockTokenRepository::new())
            .register(RegisterInput {
                name: "Mallory".into(),
                email: "mallory@example.com".into(),
                password: "secret".into(),
                role: Some(Role::Admin),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn token_of_deleted_user_is_unauthorized() {
        let mut tokens = MockTokenRepository::new();
        tokens
            .expect_verify_token()
            .returning(|_| Box::pin(async { Ok(JwtClaim::new(Uuid::new_v4(), 1)) }));
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(users, MockHasherRepository::new(), tokens)
            .authenticate("token".into())
            .await;

        assert_eq!(result, Err(CoreError::Unauthorized));
    }
}
