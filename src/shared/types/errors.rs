use thiserror::Error;

/// Structural problems with a submitted rate table.
///
/// Exactly one reason is reported per validation run: the first violation
/// found, in the order the checks are performed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Category must have at least one range.")]
    EmptyRanges,

    #[error("Range start must not be null.")]
    MissingStart,

    #[error("Ranges must start at 0.")]
    FirstStartNotZero,

    #[error("Unit price must not be null.")]
    MissingUnitPrice,

    #[error("Unit price must not be negative.")]
    NegativeUnitPrice,

    #[error("Unit price must not exceed 99999999.99.")]
    UnitPriceTooLarge,

    #[error("Range end must not be less than its start.")]
    EndBeforeStart,

    #[error("Only the last range may have an open end.")]
    UnboundedBeforeLast,

    #[error("Ranges overlap.")]
    Overlap,

    #[error("There are gaps between ranges.")]
    Gap,

    #[error("The last range must have an open end to cover unlimited consumption.")]
    LastRangeBounded,

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Duplicate categories are not allowed in a rate table.")]
    DuplicateCategory,

    #[error("Rate table must contain all mandatory categories: {required}")]
    MissingCategories { required: String },

    #[error("Rate table must contain only the mandatory categories: {required}")]
    UnexpectedCategories { required: String },
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", active_table_message(.id))]
    ActiveTableExists { id: Option<i32> },

    #[error("No active rate table.")]
    NoActiveTable,

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Category not found in the active rate table.")]
    CategoryNotInTable(String),

    #[error("Rate table not found.")]
    TableNotFound(i32),

    #[error("Rate table is already inactive.")]
    AlreadyInactive(i32),

    /// A uniqueness constraint rejected a write.
    #[error("Storage conflict: {0}")]
    StorageConflict(String),

    #[error("Database error: {0}")]
    Storage(String),
}

fn active_table_message(id: &Option<i32>) -> String {
    match id {
        Some(id) => format!(
            "An active rate table already exists with id: {}. Deactivate it before creating a new one.",
            id
        ),
        None => "Could not create the rate table: an active rate table already exists.".to_string(),
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}
