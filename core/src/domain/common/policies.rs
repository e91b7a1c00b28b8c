use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    user::entities::Role,
};

/// Stateless policy shared by every service: decisions only depend on the
/// caller identity and the resource being touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevcamperPolicy;

impl DevcamperPolicy {
    pub fn new() -> Self {
        Self
    }

    /// True when the caller holds any of `roles`.
    pub fn has_one_of_roles(&self, identity: &Identity, roles: &[Role]) -> bool {
        roles.contains(&identity.role())
    }

    pub fn is_owner_or_admin(&self, identity: &Identity, owner_id: uuid::Uuid) -> bool {
        identity.is_admin() || identity.id() == owner_id
    }

    pub fn ensure_roles(&self, identity: &Identity, roles: &[Role]) -> Result<(), CoreError> {
        ensure_policy(
            Ok(self.has_one_of_roles(identity, roles)),
            &role_not_authorized(identity),
        )
    }
}

pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}

pub fn role_not_authorized(identity: &Identity) -> String {
    format!(
        "User role {} is not authorized to access this route",
        identity.role()
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::user::entities::User;

    fn identity(role: Role) -> Identity {
        Identity::new(User {
            id: Uuid::new_v4(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    #[test]
    fn ensure_policy_maps_denial_to_forbidden() {
        let result = ensure_policy(Ok(false), "nope");
        assert_eq!(result, Err(CoreError::Forbidden("nope".to_string())));
        assert_eq!(ensure_policy(Ok(true), "nope"), Ok(()));
        assert_eq!(
            ensure_policy(Err(CoreError::NotFound), "nope"),
            Err(CoreError::NotFound)
        );
    }

    #[test]
    fn owner_or_admin() {
        let policy = DevcamperPolicy::new();
        let publisher = identity(Role::Publisher);
        let admin = identity(Role::Admin);

        assert!(policy.is_owner_or_admin(&publisher, publisher.id()));
        assert!(!policy.is_owner_or_admin(&publisher, Uuid::new_v4()));
        assert!(policy.is_owner_or_admin(&admin, Uuid::new_v4()));
    }

    #[test]
    fn ensure_roles_rejects_other_roles() {
        let policy = DevcamperPolicy::new();
        let user = identity(Role::User);

        assert!(policy.ensure_roles(&user, &[Role::User, Role::Admin]).is_ok());
        assert!(matches!(
            policy.ensure_roles(&user, &[Role::Publisher, Role::Admin]),
            Err(CoreError::Forbidden(_))
        ));
    }

    #[test]
    fn role_message_names_the_role() {
        let user = identity(Role::User);
        assert_eq!(
            role_not_authorized(&user),
            "User role user is not authorized to access this route"
        );
    }
}
