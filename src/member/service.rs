//! Member service for corkboard.
//!
//! Registration, duplicate checks, and the avatar file convention:
//! `<avatar-dir>/<username>.png`, falling back to `<avatar-dir>/unknown.png`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::password::hash_password;
use super::repository::MemberRepository;
use super::types::{Member, MemberJoin, NewMember};
use crate::db::Database;
use crate::file::FileUpload;
use crate::{CorkboardError, Result};

/// Filename of the fallback avatar image.
pub const DEFAULT_AVATAR: &str = "unknown.png";

/// Service for member operations.
pub struct MemberService<'a> {
    db: &'a Database,
    avatar_dir: &'a Path,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService with an injected avatar directory.
    pub fn new(db: &'a Database, avatar_dir: &'a Path) -> Self {
        Self { db, avatar_dir }
    }

    /// Register a new member.
    ///
    /// Rejects blank fields and taken usernames; hashes the password before
    /// storage. An optional avatar upload is written to the convention path.
    /// A failed avatar write is logged, not fatal: the registration stands.
    pub async fn join(&self, input: MemberJoin, avatar: Option<FileUpload>) -> Result<Member> {
        if input.username.trim().is_empty() {
            return Err(CorkboardError::Validation(
                "username is required".to_string(),
            ));
        }
        if input.nickname.trim().is_empty() {
            return Err(CorkboardError::Validation(
                "nickname is required".to_string(),
            ));
        }

        let repo = MemberRepository::new(self.db.pool());
        if repo.username_exists(&input.username).await? {
            return Err(CorkboardError::Validation(format!(
                "username {} is already taken",
                input.username
            )));
        }

        let hashed = hash_password(&input.password)?;
        let member = repo
            .create(&NewMember::new(
                input.username.as_str(),
                hashed,
                input.nickname.as_str(),
                input.email,
            ))
            .await?;

        if let Some(avatar) = avatar {
            if let Err(e) = self.save_avatar(&member.username, &avatar.data) {
                warn!("failed to save avatar for {}: {}", member.username, e);
            }
        }

        Ok(member)
    }

    /// Check whether a username is already registered.
    pub async fn check_duplicate(&self, username: &str) -> Result<bool> {
        MemberRepository::new(self.db.pool())
            .username_exists(username)
            .await
    }

    /// Resolve the avatar file for a username.
    ///
    /// Returns `<avatar-dir>/<username>.png` when it exists, otherwise the
    /// shared fallback image path. The caller hands the result to the file
    /// transfer helper, so a missing avatar never surfaces as NotFound.
    pub fn avatar_file(&self, username: &str) -> PathBuf {
        let path = self.avatar_dir.join(format!("{username}.png"));
        if path.exists() {
            path
        } else {
            self.avatar_dir.join(DEFAULT_AVATAR)
        }
    }

    /// Write an avatar image to the convention path.
    fn save_avatar(&self, username: &str, data: &[u8]) -> Result<()> {
        fs::create_dir_all(self.avatar_dir)?;
        fs::write(self.avatar_dir.join(format!("{username}.png")), data)?;
        Ok(())
    }
}
