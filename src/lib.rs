//! corkboard - Bulletin board REST backend
//!
//! Boards with file attachments plus member registration, implemented as a
//! storage layer, aggregate services, and a thin axum boundary.

pub mod board;
pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod file;
pub mod logging;
pub mod member;
pub mod web;

pub use board::{
    Attachment, AttachmentRepository, Board, BoardDetail, BoardPage, BoardRepository,
    BoardService, BoardSort, BoardUpdate, NewAttachment, NewBoard, PageRequest,
};
pub use config::Config;
pub use db::Database;
pub use error::{CorkboardError, Result};
pub use file::{FileStorage, FileUpload};
pub use member::{Member, MemberJoin, MemberRepository, MemberService, NewMember};
