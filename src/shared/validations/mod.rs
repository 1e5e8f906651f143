use super::types::PaginationParams;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Keeps `page * size` well inside the database's signed 64-bit offsets.
pub const MAX_PAGE: u64 = 1_000_000;

/// Clamp raw query values into a usable page request.
pub fn validate_pagination(page: Option<u64>, size: Option<u64>) -> PaginationParams {
    let page = page.unwrap_or(1).clamp(1, MAX_PAGE);
    let size = size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    PaginationParams { page, size }
}

/// `validator` custom check: rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut err = validator::ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
