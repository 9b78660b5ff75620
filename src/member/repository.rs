//! Member repository for corkboard.

use sqlx::SqlitePool;

use super::types::{Member, NewMember};
use crate::datetime::now_utc_string;
use crate::{CorkboardError, Result};

/// Repository for member operations.
pub struct MemberRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MemberRepository<'a> {
    /// Create a new MemberRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new member.
    ///
    /// Returns the created member with the assigned ID.
    pub async fn create(&self, new_member: &NewMember) -> Result<Member> {
        let result = sqlx::query(
            "INSERT INTO members (username, password, nickname, email, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&new_member.username)
        .bind(&new_member.password)
        .bind(&new_member.nickname)
        .bind(&new_member.email)
        .bind(now_utc_string())
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("member".to_string()))
    }

    /// Get a member by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT id, username, password, nickname, email, created_at
             FROM members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(member)
    }

    /// Get a member by username.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT id, username, password, nickname, email, created_at
             FROM members WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(member)
    }

    /// Check if a username is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM members WHERE username = ?)")
                .bind(username)
                .fetch_one(self.pool)
                .await?;
        Ok(exists)
    }

    /// Count all members.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
