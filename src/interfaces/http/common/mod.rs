//! Shared HTTP building blocks: response envelope, errors, extractors

mod error;
mod response;
mod validated_json;

pub use error::ApiError;
pub use response::{ApiResponse, PaginatedResponse, PaginationQuery};
pub use validated_json::{ValidatedJson, ValidatedJsonRejection};
