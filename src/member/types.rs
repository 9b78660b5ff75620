//! Member model for corkboard.

/// Member entity representing a registered user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Member {
    /// Unique member ID.
    pub id: i64,
    /// Login username (unique, immutable).
    pub username: String,
    /// Password hash (Argon2).
    pub password: String,
    /// Display name.
    pub nickname: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Registration timestamp.
    pub created_at: String,
}

/// Data for creating a new member row.
///
/// The password must already be hashed; the repository never sees
/// plaintext.
#[derive(Debug, Clone)]
pub struct NewMember {
    /// Login username.
    pub username: String,
    /// Password hash.
    pub password: String,
    /// Display name.
    pub nickname: String,
    /// Email address (optional).
    pub email: Option<String>,
}

impl NewMember {
    /// Create a new member row input.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        nickname: impl Into<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            nickname: nickname.into(),
            email,
        }
    }
}

/// Registration input as received from a caller, password still plain.
#[derive(Debug, Clone)]
pub struct MemberJoin {
    /// Desired username.
    pub username: String,
    /// Plaintext password; hashed by the service before storage.
    pub password: String,
    /// Display name.
    pub nickname: String,
    /// Email address (optional).
    pub email: Option<String>,
}

impl MemberJoin {
    /// Create a registration input.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        nickname: impl Into<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            nickname: nickname.into(),
            email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member() {
        let member = NewMember::new("alice", "$argon2id$...", "Alice", None);
        assert_eq!(member.username, "alice");
        assert!(member.email.is_none());
    }

    #[test]
    fn test_member_join() {
        let join = MemberJoin::new("bob", "hunter22", "Bob", Some("bob@example.com".to_string()));
        assert_eq!(join.nickname, "Bob");
        assert_eq!(join.email.as_deref(), Some("bob@example.com"));
    }
}
