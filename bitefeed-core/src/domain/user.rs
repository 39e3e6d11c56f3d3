//! User domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account holder whose bank transactions feed the pipeline
///
/// Every core operation takes the user explicitly; there is no ambient
/// "current user" anywhere in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Uuid, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            avatar: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let id = Uuid::new_v4();
        let user = User::new(id, "test@example.com", "Test User");
        assert_eq!(user.id, id);
        assert_eq!(user.email, "test@example.com");
        assert!(user.avatar.is_none());
    }
}
