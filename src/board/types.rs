//! Board and attachment models for corkboard.

use std::fmt;
use std::str::FromStr;

/// Board entity representing a bulletin board post.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Board {
    /// Unique board ID, assigned by the store and never reused.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Author identifier.
    pub writer: String,
    /// Creation timestamp, set once at insert.
    pub created_at: String,
    /// Last-update timestamp, refreshed on every update.
    pub updated_at: String,
}

/// Data for creating a new board.
///
/// Timestamps are assigned by the storage layer; there is no way for a
/// caller to supply them.
#[derive(Debug, Clone)]
pub struct NewBoard {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Author identifier.
    pub writer: String,
}

impl NewBoard {
    /// Create a new board input.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        writer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            writer: writer.into(),
        }
    }
}

/// Data for updating an existing board.
///
/// Only title and content are mutable; the writer and creation timestamp
/// never change after insert.
#[derive(Debug, Clone, Default)]
pub struct BoardUpdate {
    /// New title.
    pub title: Option<String>,
    /// New content.
    pub content: Option<String>,
}

impl BoardUpdate {
    /// Create an update touching both mutable fields.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Attachment entity, bound to exactly one board.
///
/// Attachments are immutable once created; replacement is delete and
/// recreate.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Attachment {
    /// Unique attachment ID.
    pub id: i64,
    /// Owning board ID.
    pub board_id: i64,
    /// Absolute on-disk path of the stored file.
    pub path: String,
    /// Original filename, used for download display.
    pub filename: String,
    /// Upload timestamp.
    pub created_at: String,
}

/// Data for creating a new attachment.
#[derive(Debug, Clone)]
pub struct NewAttachment {
    /// Owning board ID. Must reference an existing board.
    pub board_id: i64,
    /// Absolute on-disk path of the stored file.
    pub path: String,
    /// Original filename.
    pub filename: String,
}

impl NewAttachment {
    /// Create a new attachment input.
    pub fn new(board_id: i64, path: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            board_id,
            path: path.into(),
            filename: filename.into(),
        }
    }
}

/// Sort criterion for paginated board queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardSort {
    /// Newest boards first (default).
    #[default]
    Newest,
    /// Oldest boards first.
    Oldest,
}

impl BoardSort {
    /// SQL ORDER BY clause for this criterion.
    pub fn order_clause(&self) -> &'static str {
        match self {
            BoardSort::Newest => "ORDER BY id DESC",
            BoardSort::Oldest => "ORDER BY id ASC",
        }
    }
}

impl fmt::Display for BoardSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardSort::Newest => write!(f, "newest"),
            BoardSort::Oldest => write!(f, "oldest"),
        }
    }
}

impl FromStr for BoardSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(BoardSort::Newest),
            "oldest" => Ok(BoardSort::Oldest),
            _ => Err(format!("unknown sort criterion: {s}")),
        }
    }
}

/// A page request for board listings.
///
/// Pages are 1-based. Out-of-range values are clamped to the smallest
/// valid request rather than rejected.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: i64,
    /// Page size, greater than zero.
    pub size: i64,
    /// Sort criterion.
    pub sort: BoardSort,
}

impl PageRequest {
    /// Create a page request, clamping page and size to at least 1.
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: page.max(1),
            size: size.max(1),
            sort: BoardSort::default(),
        }
    }

    /// Create a page request with an explicit sort criterion.
    pub fn with_sort(page: i64, size: i64, sort: BoardSort) -> Self {
        Self {
            page: page.max(1),
            size: size.max(1),
            sort,
        }
    }

    /// Row offset for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.size
    }
}
