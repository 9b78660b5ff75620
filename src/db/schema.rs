//! Database schema and migrations for corkboard.
//!
//! Migrations are applied sequentially when the database is opened. The
//! schema_version table tracks which migrations have run.

/// Database migrations, executed in order.
pub const MIGRATIONS: &[&str] = &[
    // v1: Boards table
    r#"
-- Boards table for bulletin board posts
CREATE TABLE boards (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    content     TEXT NOT NULL,
    writer      TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);

CREATE INDEX idx_boards_writer ON boards(writer);
"#,
    // v2: Attachments table
    r#"
-- Attachments table, each row bound to exactly one board
CREATE TABLE attachments (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    board_id    INTEGER NOT NULL REFERENCES boards(id),
    path        TEXT NOT NULL,            -- absolute on-disk path
    filename    TEXT NOT NULL,            -- original name for download display
    created_at  TEXT NOT NULL
);

CREATE INDEX idx_attachments_board_id ON attachments(board_id);
"#,
    // v3: Members table
    r#"
-- Members table for registration
CREATE TABLE members (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    username    TEXT NOT NULL UNIQUE,
    password    TEXT NOT NULL,            -- Argon2 hash
    nickname    TEXT NOT NULL,
    email       TEXT,
    created_at  TEXT NOT NULL
);

CREATE INDEX idx_members_username ON members(username);
"#,
];
