use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaim {
    pub fn new(sub: Uuid, expire_days: i64) -> Self {
        let now = Utc::now();

        Self {
            sub,
            iat: now.timestamp(),
            exp: (now + Duration::days(expire_days)).timestamp(),
        }
    }
}
