use crate::domain::common::policies::DevcamperPolicy;

/// Application service. Each domain implements its service trait on this
/// type, bounding only the repositories it needs.
#[derive(Clone)]
pub struct Service<B, C, R, U, H, T, HC> {
    pub(crate) bootcamp_repository: B,
    pub(crate) course_repository: C,
    pub(crate) review_repository: R,
    pub(crate) user_repository: U,
    pub(crate) hasher_repository: H,
    pub(crate) token_repository: T,
    pub(crate) health_check_repository: HC,
    pub(crate) policy: DevcamperPolicy,
}

impl<B, C, R, U, H, T, HC> Service<B, C, R, U, H, T, HC> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        bootcamp_repository: B,
        course_repository: C,
        review_repository: R,
        user_repository: U,
        hasher_repository: H,
        token_repository: T,
        health_check_repository: HC,
    ) -> Self {
        Self {
            bootcamp_repository,
            course_repository,
            review_repository,
            user_repository,
            hasher_repository,
            token_repository,
            health_check_repository,
            policy: DevcamperPolicy::new(),
        }
    }
}
