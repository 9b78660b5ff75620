//! Member module for corkboard.
//!
//! Registration and the avatar lookup convention. Sessions and login are
//! out of scope; the stored password hash exists for the registration
//! contract only.

mod password;
mod repository;
mod service;
mod types;

pub use password::{
    hash_password, validate_password, verify_password, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
pub use repository::MemberRepository;
pub use service::{MemberService, DEFAULT_AVATAR};
pub use types::{Member, MemberJoin, NewMember};
