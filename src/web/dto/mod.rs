//! Request and response DTOs for the Web API.

mod request;
mod response;

pub use request::{PaginationQuery, UpdateBoardRequest};
pub use response::{
    ApiResponse, AttachmentResponse, BoardDetailResponse, BoardResponse, MemberResponse,
    PaginatedResponse, PaginationMeta,
};
