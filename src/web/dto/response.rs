//! Response DTOs for the Web API.

use serde::Serialize;

use crate::board::{Attachment, Board, BoardDetail, BoardPage};
use crate::datetime::to_rfc3339;
use crate::member::Member;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    /// Response data.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Current 1-based page number.
    pub page: i64,
    /// Items per page.
    pub size: i64,
    /// Total number of items.
    pub total: i64,
}

/// Board summary response (list views; no attachments).
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Board ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Content.
    pub content: String,
    /// Author identifier.
    pub writer: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last-update timestamp (RFC 3339).
    pub updated_at: String,
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            title: board.title,
            content: board.content,
            writer: board.writer,
            created_at: to_rfc3339(&board.created_at),
            updated_at: to_rfc3339(&board.updated_at),
        }
    }
}

/// Board detail response including the attachment list.
#[derive(Debug, Serialize)]
pub struct BoardDetailResponse {
    /// Board ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Content.
    pub content: String,
    /// Author identifier.
    pub writer: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last-update timestamp (RFC 3339).
    pub updated_at: String,
    /// Attachments, ordered by ID. Always present, possibly empty.
    pub attachments: Vec<AttachmentResponse>,
}

impl From<BoardDetail> for BoardDetailResponse {
    fn from(detail: BoardDetail) -> Self {
        Self {
            id: detail.board.id,
            title: detail.board.title,
            content: detail.board.content,
            writer: detail.board.writer,
            created_at: to_rfc3339(&detail.board.created_at),
            updated_at: to_rfc3339(&detail.board.updated_at),
            attachments: detail
                .attachments
                .into_iter()
                .map(AttachmentResponse::from)
                .collect(),
        }
    }
}

/// Attachment response.
///
/// The on-disk path never appears here; clients address attachments by ID.
#[derive(Debug, Serialize)]
pub struct AttachmentResponse {
    /// Attachment ID, also the download handle.
    pub id: i64,
    /// Owning board ID.
    pub board_id: i64,
    /// Original filename.
    pub filename: String,
    /// Upload timestamp (RFC 3339).
    pub created_at: String,
}

impl From<Attachment> for AttachmentResponse {
    fn from(attachment: Attachment) -> Self {
        Self {
            id: attachment.id,
            board_id: attachment.board_id,
            filename: attachment.filename,
            created_at: to_rfc3339(&attachment.created_at),
        }
    }
}

/// Member response.
///
/// The password hash never leaves the service boundary.
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    /// Member ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Display name.
    pub nickname: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Registration timestamp (RFC 3339).
    pub created_at: String,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            username: member.username,
            nickname: member.nickname,
            email: member.email,
            created_at: to_rfc3339(&member.created_at),
        }
    }
}

impl From<BoardPage> for PaginatedResponse<BoardResponse> {
    fn from(page: BoardPage) -> Self {
        Self {
            data: page.items.into_iter().map(BoardResponse::from).collect(),
            meta: PaginationMeta {
                page: page.page,
                size: page.size,
                total: page.total,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        Board {
            id: 1,
            title: "T".to_string(),
            content: "C".to_string(),
            writer: "alice".to_string(),
            created_at: "2024-01-15 10:30:00.000000".to_string(),
            updated_at: "2024-01-16 11:00:00.000000".to_string(),
        }
    }

    #[test]
    fn test_board_response_timestamps_rfc3339() {
        let response = BoardResponse::from(sample_board());
        assert_eq!(response.created_at, "2024-01-15T10:30:00.000000Z");
        assert_eq!(response.updated_at, "2024-01-16T11:00:00.000000Z");
    }

    #[test]
    fn test_detail_response_keeps_empty_attachments() {
        let detail = BoardDetail {
            board: sample_board(),
            attachments: vec![],
        };
        let response = BoardDetailResponse::from(detail);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["attachments"], serde_json::json!([]));
    }

    #[test]
    fn test_attachment_response_hides_path() {
        let attachment = Attachment {
            id: 9,
            board_id: 1,
            path: "/secret/storage/ab/x.txt".to_string(),
            filename: "x.txt".to_string(),
            created_at: "2024-01-15 10:30:00.000000".to_string(),
        };
        let json = serde_json::to_value(AttachmentResponse::from(attachment)).unwrap();
        assert!(json.get("path").is_none());
        assert_eq!(json["filename"], "x.txt");
    }

    #[test]
    fn test_member_response_hides_password() {
        let member = Member {
            id: 2,
            username: "bob".to_string(),
            password: "$argon2id$secret".to_string(),
            nickname: "Bob".to_string(),
            email: None,
            created_at: "2024-01-15 10:30:00.000000".to_string(),
        };
        let json = serde_json::to_value(MemberResponse::from(member)).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("email").is_none());
        assert_eq!(json["username"], "bob");
    }
}
