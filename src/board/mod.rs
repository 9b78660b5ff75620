//! Bulletin board module for corkboard.
//!
//! Boards are posts with title/content/writer and zero or more file
//! attachments. The repository layer issues raw CRUD and pagination
//! queries; the service layer enforces the board/attachment lifecycle.

mod attachments;
mod repository;
mod service;
mod types;

pub use attachments::AttachmentRepository;
pub use repository::BoardRepository;
pub use service::{BoardDetail, BoardPage, BoardService, MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH};
pub use types::{Attachment, Board, BoardSort, BoardUpdate, NewAttachment, NewBoard, PageRequest};
